//! In-memory guest storage.
//!
//! # Responsibility
//! - Own the ordered guest collection and the current filter string.
//! - Enforce capacity and name invariants on every mutation.
//!
//! # Invariants
//! - Collection size never exceeds the configured maximum.
//! - Insertion order is preserved by every read path.

pub mod clock;
pub mod guest_store;
