//! Single-threaded reactive cells.
//!
//! # Responsibility
//! - [`Observable`]: shared mutable cell with synchronous change notification.
//! - [`Computed`]: derived cell recomputed eagerly when either source changes.
//! - [`Subscription`]: RAII guard; dropping it unsubscribes.
//!
//! # Invariants
//! - Subscribers run in registration order, on the writing call's stack,
//!   before that call returns.
//! - No internal borrow is held while callbacks run, so a callback may read
//!   or write any cell (including the one that notified it).
//! - `version` increments exactly once per notified change.
//!
//! Cells use `Rc<RefCell<..>>` and are therefore `!Send`; sharing a store
//! across threads needs one outer serialization point.

mod computed;
mod observable;
mod subscriber;

pub use computed::Computed;
pub use observable::{ChangeReport, Observable};
pub use subscriber::Subscription;
