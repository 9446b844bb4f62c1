//! Core domain logic for the stress bubble tracker.
//! This crate is the single source of truth for stressor data invariants.

pub mod logging;
pub mod model;
pub mod reactive;
pub mod service;
pub mod snapshot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::date::{is_valid_date_key, shift_date_key, today_key};
pub use model::level::{StressLevel, StressLevelError};
pub use model::stressor::{
    Stressor, StressorId, StressorPatch, StressorValidationError, MAX_NAME_CHARS, MAX_NOTES_CHARS,
};
pub use model::StressData;
pub use reactive::{Computed, Observable, Subscription};
pub use service::stressor_service::{NewStressor, ServiceError, ServiceResult, StressorService};
pub use snapshot::{
    parse_stress_data, read_snapshot, to_json_string, write_snapshot, SnapshotError,
};
pub use store::{MutationOutcome, StressStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
