//! Guest domain model.
//!
//! # Responsibility
//! - Define the canonical guest record owned by the store.
//! - Keep name/category normalization rules in one place.
//!
//! # Invariants
//! - Every guest is identified by a stable `GuestId`.
//! - A guest name is never empty once a record exists.

pub mod guest;
