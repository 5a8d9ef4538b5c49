//! Core domain logic for the guest list.
//! This crate is the single source of truth for list invariants; hosts only
//! dispatch actions and draw the rendered screen.

pub mod action;
pub mod logging;
pub mod model;
pub mod notify;
pub mod session;
pub mod store;
pub mod view;

pub use action::Action;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::guest::{
    Guest, GuestId, GuestStatus, GuestValidationError, DEFAULT_CATEGORIES, FALLBACK_CATEGORY,
};
pub use notify::notifier::{
    Notification, NotificationKind, NotificationTicket, Notifier, DEFAULT_NOTIFY_DURATION_MS,
};
pub use session::{DispatchOutcome, Screen, Session, SessionConfig};
pub use store::clock::{Clock, ManualClock, SystemClock};
pub use store::guest_store::{GuestStore, StoreConfig, StoreError, StoreResult, MAX_GUESTS};
pub use view::edit::EditState;
pub use view::render::{
    render, ControlKind, GuestRow, ListView, NameCell, RowControl, EMPTY_LIST_MESSAGE,
    NO_MATCH_MESSAGE,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
