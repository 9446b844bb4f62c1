//! Severity level model.
//!
//! # Invariants
//! - A `StressLevel` is always within `1..=5`.
//! - Wire representation is the bare integer.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Severity of one stressor, restricted to five explicit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StressLevel {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

/// Raised when an integer outside `1..=5` is converted into a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressLevelError(pub i64);

impl Display for StressLevelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "stress level must be within 1..=5, got {}", self.0)
    }
}

impl Error for StressLevelError {}

impl StressLevel {
    pub const MIN: Self = Self::One;
    pub const MAX: Self = Self::Five;

    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Numeric severity (`1..=5`).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Next level up, saturating at `Five`.
    pub fn saturating_next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::Four,
            Self::Four | Self::Five => Self::Five,
        }
    }

    /// Next level down; `None` below `One`.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::One => None,
            Self::Two => Some(Self::One),
            Self::Three => Some(Self::Two),
            Self::Four => Some(Self::Three),
            Self::Five => Some(Self::Four),
        }
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl TryFrom<u8> for StressLevel {
    type Error = StressLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(StressLevelError(i64::from(other))),
        }
    }
}

impl TryFrom<i64> for StressLevel {
    type Error = StressLevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| StressLevelError(value))
            .and_then(<Self as TryFrom<u8>>::try_from)
    }
}

impl From<StressLevel> for u8 {
    fn from(value: StressLevel) -> Self {
        value.value()
    }
}

impl Display for StressLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
