//! Stressor data store.
//!
//! # Responsibility
//! - Own the canonical `StressData` mapping and the current date cursor.
//! - Apply add/update/delete/load as single observable state transitions.
//! - Derive the stressors visible for the cursor date.
//!
//! # Invariants
//! - A date key is present iff its sequence is non-empty (after store writes).
//! - Not-found inputs are absorbed as no-ops; no store operation fails.
//! - No-op mutations emit no notifications.

mod ops;
mod stress_store;

pub use ops::MutationOutcome;
pub use stress_store::StressStore;
