//! Declarative list view.
//!
//! # Responsibility
//! - Derive the visible list from store state on every change.
//! - Own transient inline-edit state, which is not part of the store.
//!
//! # Invariants
//! - Rendering never mutates the store.
//! - Each render is built from scratch; no row survives between renders.

pub mod edit;
pub mod render;
