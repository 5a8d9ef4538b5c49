//! Flutter-facing bindings for the guest list core.

pub mod api;
