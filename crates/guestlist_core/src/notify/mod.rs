//! Transient user-facing notifications.

pub mod notifier;
