//! Stressor record model.
//!
//! # Responsibility
//! - Define the canonical tracked-stress record and its wire shape.
//! - Define the constrained partial update (`StressorPatch`).
//! - Provide boundary validation used before records reach the store.
//!
//! # Invariants
//! - `id` is assigned by the caller and stays stable for the record lifetime.
//! - `notes: None` means "no notes" and is distinct from `Some("")`.
//! - `created_at` orders records for display; it never identifies them.

use crate::model::date::is_valid_date_key;
use crate::model::level::StressLevel;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Upper bound for `name`, in characters.
pub const MAX_NAME_CHARS: usize = 50;
/// Upper bound for `notes`, in characters.
pub const MAX_NOTES_CHARS: usize = 500;

/// Opaque stressor identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StressorId = String;

/// One tracked stress event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stressor {
    pub id: StressorId,
    /// Display label.
    pub name: String,
    pub level: StressLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `YYYY-MM-DD` date the record is filed under.
    pub date: String,
    /// Unix epoch milliseconds. Serialized as `createdAt`.
    pub created_at: i64,
}

/// Boundary validation errors for stressor records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StressorValidationError {
    EmptyId,
    EmptyName,
    NameTooLong { chars: usize },
    NotesTooLong { chars: usize },
    InvalidDate(String),
}

impl Display for StressorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "stressor id cannot be empty"),
            Self::EmptyName => write!(f, "stressor name cannot be empty"),
            Self::NameTooLong { chars } => write!(
                f,
                "stressor name has {chars} chars; maximum is {MAX_NAME_CHARS}"
            ),
            Self::NotesTooLong { chars } => write!(
                f,
                "stressor notes have {chars} chars; maximum is {MAX_NOTES_CHARS}"
            ),
            Self::InvalidDate(value) => {
                write!(f, "stressor date must be YYYY-MM-DD, got `{value}`")
            }
        }
    }
}

impl Error for StressorValidationError {}

impl Stressor {
    /// Creates a record with a generated UUIDv4 id and `created_at = now`.
    ///
    /// Intended for boundary code; the store itself never assigns ids.
    pub fn new(name: impl Into<String>, level: StressLevel, date: impl Into<String>) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            name,
            level,
            date,
            Utc::now().timestamp_millis(),
        )
    }

    /// Creates a record with a caller-provided id and timestamp.
    ///
    /// Used by import paths where identity already exists externally. Does
    /// not validate; call [`Stressor::validate`] at the boundary.
    pub fn with_id(
        id: impl Into<StressorId>,
        name: impl Into<String>,
        level: StressLevel,
        date: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            notes: None,
            date: date.into(),
            created_at,
        }
    }

    /// Builder-style setter for `notes`.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Checks boundary constraints the store does not enforce.
    ///
    /// # Errors
    /// - Blank `id` or `name`.
    /// - `name` longer than [`MAX_NAME_CHARS`], `notes` longer than [`MAX_NOTES_CHARS`].
    /// - `date` not a valid `YYYY-MM-DD` calendar date.
    pub fn validate(&self) -> Result<(), StressorValidationError> {
        if self.id.trim().is_empty() {
            return Err(StressorValidationError::EmptyId);
        }
        validate_name(&self.name)?;
        validate_notes(self.notes.as_deref())?;
        if !is_valid_date_key(&self.date) {
            return Err(StressorValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), StressorValidationError> {
    if name.trim().is_empty() {
        return Err(StressorValidationError::EmptyName);
    }
    let chars = name.chars().count();
    if chars > MAX_NAME_CHARS {
        return Err(StressorValidationError::NameTooLong { chars });
    }
    Ok(())
}

fn validate_notes(notes: Option<&str>) -> Result<(), StressorValidationError> {
    let chars = notes.map_or(0, |value| value.chars().count());
    if chars > MAX_NOTES_CHARS {
        return Err(StressorValidationError::NotesTooLong { chars });
    }
    Ok(())
}

/// Partial update for one stressor; `None` fields are left untouched.
///
/// `notes` is doubly optional: `Some(None)` clears existing notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StressorPatch {
    pub id: Option<StressorId>,
    pub name: Option<String>,
    pub level: Option<StressLevel>,
    pub notes: Option<Option<String>>,
    pub date: Option<String>,
    pub created_at: Option<i64>,
}

impl StressorPatch {
    /// Patch that only changes `level`.
    pub fn level(level: StressLevel) -> Self {
        Self {
            level: Some(level),
            ..Self::default()
        }
    }

    /// Patch that only replaces `notes` (`None` clears them).
    pub fn notes(notes: Option<String>) -> Self {
        Self {
            notes: Some(notes),
            ..Self::default()
        }
    }

    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns `original` with every present patch field overriding it.
    pub fn apply(&self, original: &Stressor) -> Stressor {
        Stressor {
            id: self.id.clone().unwrap_or_else(|| original.id.clone()),
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            level: self.level.unwrap_or(original.level),
            notes: match &self.notes {
                Some(notes) => notes.clone(),
                None => original.notes.clone(),
            },
            date: self.date.clone().unwrap_or_else(|| original.date.clone()),
            created_at: self.created_at.unwrap_or(original.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Stressor, StressorPatch, StressorValidationError, MAX_NAME_CHARS};
    use crate::model::level::StressLevel;

    fn sample() -> Stressor {
        Stressor::with_id("s-1", "Work", StressLevel::Three, "2024-12-07", 1_000)
            .with_notes("deadline")
    }

    #[test]
    fn apply_overrides_present_fields_only() {
        let patched = StressorPatch::level(StressLevel::Five).apply(&sample());
        assert_eq!(patched.level, StressLevel::Five);
        assert_eq!(patched.name, "Work");
        assert_eq!(patched.notes.as_deref(), Some("deadline"));
        assert_eq!(patched.created_at, 1_000);
    }

    #[test]
    fn apply_can_clear_notes() {
        let patched = StressorPatch::notes(None).apply(&sample());
        assert_eq!(patched.notes, None);
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = StressorPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&sample()), sample());
    }

    #[test]
    fn validate_rejects_long_name_and_bad_date() {
        let mut stressor = sample();
        stressor.name = "x".repeat(MAX_NAME_CHARS + 1);
        assert_eq!(
            stressor.validate(),
            Err(StressorValidationError::NameTooLong {
                chars: MAX_NAME_CHARS + 1
            })
        );

        let mut stressor = sample();
        stressor.date = "12/07/2024".to_string();
        assert!(matches!(
            stressor.validate(),
            Err(StressorValidationError::InvalidDate(_))
        ));
    }
}
