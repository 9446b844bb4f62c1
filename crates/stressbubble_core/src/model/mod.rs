//! Stressor domain model.
//!
//! # Responsibility
//! - Define the plain data shapes shared by the store and its consumers.
//! - Keep boundary validation next to the types it constrains.
//!
//! # Invariants
//! - `StressData` keys are `YYYY-MM-DD` strings.
//! - Per-date sequences keep insertion order.
//! - Store mutations never leave an empty sequence behind a key.

use std::collections::BTreeMap;

pub mod date;
pub mod level;
pub mod stressor;

/// Date-keyed collection of stressors, one ordered sequence per date.
pub type StressData = BTreeMap<String, Vec<stressor::Stressor>>;
