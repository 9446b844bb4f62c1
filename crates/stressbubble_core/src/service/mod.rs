//! Use-case services over the stressor store.
//!
//! # Responsibility
//! - Construct and validate records before they reach the store.
//! - Offer a strict variant of store mutations that reports not-found.

pub mod stressor_service;
