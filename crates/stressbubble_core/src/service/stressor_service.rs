//! Stressor use-case service.
//!
//! # Responsibility
//! - Build new records (id, timestamp, trimmed text) from user input.
//! - Validate edits before delegating to [`StressStore`].
//!
//! # Invariants
//! - Invalid input never reaches the store.
//! - Not-found is reported as [`ServiceError::NotFound`]; the store state is
//!   unchanged in that case.

use crate::model::date::is_valid_date_key;
use crate::model::level::StressLevel;
use crate::model::stressor::{Stressor, StressorId, StressorPatch, StressorValidationError};
use crate::logging::sanitize_field;
use crate::store::{MutationOutcome, StressStore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for stressor use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input failed boundary validation.
    Validation(StressorValidationError),
    /// No record with `stressor_id` exists at `date`.
    NotFound {
        date: String,
        stressor_id: StressorId,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { date, stressor_id } => {
                write!(f, "stressor not found: {stressor_id} on {date}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<StressorValidationError> for ServiceError {
    fn from(value: StressorValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Request model for recording a new stressor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStressor {
    pub name: String,
    pub level: StressLevel,
    /// Blank notes are stored as absent.
    pub notes: Option<String>,
    /// Target date; `None` files the record under the store cursor.
    pub date: Option<String>,
}

impl NewStressor {
    pub fn new(name: impl Into<String>, level: StressLevel) -> Self {
        Self {
            name: name.into(),
            level,
            notes: None,
            date: None,
        }
    }
}

/// Service facade borrowing one store instance.
pub struct StressorService<'store> {
    store: &'store StressStore,
}

impl<'store> StressorService<'store> {
    pub fn new(store: &'store StressStore) -> Self {
        Self { store }
    }

    /// Validates `request`, mints id and timestamp, and appends the record.
    ///
    /// Returns the stored record.
    pub fn record_stressor(&self, request: NewStressor) -> ServiceResult<Stressor> {
        let date = request
            .date
            .unwrap_or_else(|| self.store.current_date());
        if !is_valid_date_key(&date) {
            warn!("event=stressor_record module=service status=error reason=invalid_date");
            return Err(StressorValidationError::InvalidDate(date).into());
        }

        let mut stressor = Stressor::new(request.name.trim(), request.level, date.as_str());
        stressor.notes = normalize_notes(request.notes.as_deref());
        stressor.validate()?;

        self.store.add_stressor(&date, stressor.clone());
        info!(
            "event=stressor_record module=service status=ok date={} level={}",
            date, stressor.level
        );
        Ok(stressor)
    }

    /// Applies `patch` to the record, validating the merged result first.
    ///
    /// Returns the first updated record.
    pub fn edit_stressor(
        &self,
        date: &str,
        stressor_id: &str,
        patch: &StressorPatch,
    ) -> ServiceResult<Stressor> {
        let existing = self.require(date, stressor_id)?;
        let merged = patch.apply(&existing);
        merged.validate()?;

        self.store.update_stressor(date, stressor_id, patch);
        Ok(merged)
    }

    /// Replaces notes; blank input clears them.
    pub fn edit_notes(&self, date: &str, stressor_id: &str, notes: &str) -> ServiceResult<Stressor> {
        let patch = StressorPatch::notes(normalize_notes(Some(notes)));
        self.edit_stressor(date, stressor_id, &patch)
    }

    /// Raises the level by one, capped at five.
    pub fn increase_level(&self, date: &str, stressor_id: &str) -> ServiceResult<Stressor> {
        let existing = self.require(date, stressor_id)?;
        if existing.level.is_max() {
            return Ok(existing);
        }
        let patch = StressorPatch::level(existing.level.saturating_next());
        self.edit_stressor(date, stressor_id, &patch)
    }

    /// Sets the level directly (clicking the n-th cell).
    pub fn set_level(
        &self,
        date: &str,
        stressor_id: &str,
        level: StressLevel,
    ) -> ServiceResult<Stressor> {
        self.edit_stressor(date, stressor_id, &StressorPatch::level(level))
    }

    /// Lowers the level by one; removing the last cell of a level-one
    /// stressor deletes it.
    ///
    /// Returns the updated record, or `None` once it was deleted.
    pub fn decrease_level(&self, date: &str, stressor_id: &str) -> ServiceResult<Option<Stressor>> {
        let existing = self.require(date, stressor_id)?;
        match existing.level.prev() {
            Some(level) => self.set_level(date, stressor_id, level).map(Some),
            None => self.remove_stressor(date, stressor_id).map(|()| None),
        }
    }

    /// Deletes every record at `date` carrying `stressor_id`.
    pub fn remove_stressor(&self, date: &str, stressor_id: &str) -> ServiceResult<()> {
        match self.store.delete_stressor(date, stressor_id) {
            MutationOutcome::Applied { affected } if affected > 0 => Ok(()),
            _ => Err(not_found(date, stressor_id)),
        }
    }

    fn require(&self, date: &str, stressor_id: &str) -> ServiceResult<Stressor> {
        self.store
            .stressor(date, stressor_id)
            .ok_or_else(|| not_found(date, stressor_id))
    }
}

fn not_found(date: &str, stressor_id: &str) -> ServiceError {
    warn!(
        "event=stressor_lookup module=service status=error reason=not_found date={}",
        sanitize_field(date)
    );
    ServiceError::NotFound {
        date: date.to_string(),
        stressor_id: stressor_id.to_string(),
    }
}

fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::normalize_notes;

    #[test]
    fn normalize_notes_trims_and_drops_blank() {
        assert_eq!(normalize_notes(Some("  hi ")).as_deref(), Some("hi"));
        assert_eq!(normalize_notes(Some("   ")), None);
        assert_eq!(normalize_notes(None), None);
    }
}
