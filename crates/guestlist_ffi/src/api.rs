//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the guest list session to Dart via FRB as sync calls.
//! - Translate string IDs and core views into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide session backs every call; `guest_reset` replaces it.
//! - Every call returns the snapshot to draw next, so Dart never re-derives
//!   list state on its own.

use guestlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Action, DispatchOutcome, GuestId, GuestRow, GuestStatus, NameCell, Notification,
    NotificationTicket, Screen, Session, SessionConfig, StoreConfig,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

static SESSION: Lazy<Mutex<Session>> = Lazy::new(|| Mutex::new(Session::default()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One visible guest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRowItem {
    /// Stable guest ID in string form.
    pub guest_id: String,
    /// Name, or the edit draft when `editing` is true.
    pub name: String,
    /// Whether the row shows an edit field with a single save control.
    pub editing: bool,
    pub category: String,
    /// Local `YYYY-MM-DD HH:MM` creation time.
    pub created_label: String,
    /// `Attending` or `Not Attending`.
    pub status_label: String,
    pub attending: bool,
}

/// Visible banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    /// Pass back to `notification_dismiss` when the host timer fires.
    pub ticket: u64,
    pub message: String,
    /// `success|error|info`.
    pub kind: String,
    /// Milliseconds left until the banner should be hidden, as of this
    /// snapshot. Never negative.
    pub remaining_ms: i64,
    /// Unix epoch milliseconds at which the banner is hidden.
    pub dismiss_at_epoch_ms: i64,
}

/// Full screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestListSnapshot {
    pub rows: Vec<GuestRowItem>,
    /// Placeholder text when no rows are visible.
    pub empty_message: Option<String>,
    /// Unfiltered guest count.
    pub total_count: u32,
    pub attending_count: u32,
    pub capacity: u32,
    pub filter: String,
    pub notification: Option<NotificationItem>,
}

/// Action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestActionResponse {
    /// Whether the action changed state.
    pub ok: bool,
    /// Human-readable result for diagnostics; UI text lives in the banner.
    pub message: String,
    /// Screen to draw after this action.
    pub snapshot: GuestListSnapshot,
}

/// Adds one guest from the new-guest form.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_add(name: String, category: String) -> GuestActionResponse {
    dispatch(Action::AddGuest { name, category })
}

/// Stores the live filter text.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_set_filter(text: String) -> GuestActionResponse {
    dispatch(Action::SetFilter { text })
}

#[flutter_rust_bridge::frb(sync)]
pub fn guest_toggle_status(guest_id: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::ToggleStatus { id })
}

/// Enters inline edit mode for one row.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_begin_edit(guest_id: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::BeginEdit { id })
}

/// Mirrors edit field keystrokes so a rejected save keeps the text.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_update_draft(guest_id: String, text: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::UpdateDraft { id, text })
}

/// Commits the current draft (save button or accept keystroke).
#[flutter_rust_bridge::frb(sync)]
pub fn guest_save_edit(guest_id: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::SaveEdit { id })
}

/// Commits an explicit name for one row.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_submit_rename(guest_id: String, name: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::SubmitRename { id, name })
}

/// Leaves edit mode without renaming.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_cancel_edit(guest_id: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::CancelEdit { id })
}

#[flutter_rust_bridge::frb(sync)]
pub fn guest_remove(guest_id: String) -> GuestActionResponse {
    dispatch_for(guest_id.as_str(), |id| Action::Remove { id })
}

/// Current screen without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_snapshot() -> GuestListSnapshot {
    let session = lock_session();
    to_snapshot(&session)
}

/// Host timer callback for one banner.
///
/// Returns `true` when the banner was hidden; stale tickets are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn notification_dismiss(ticket: u64) -> bool {
    lock_session().dismiss_notification(NotificationTicket::new(ticket))
}

/// Hides an expired banner. Returns `true` when something was hidden.
#[flutter_rust_bridge::frb(sync)]
pub fn notification_tick() -> bool {
    lock_session().tick()
}

/// Replaces the session with an empty one.
///
/// `max_guests = None` keeps the default limit.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_reset(max_guests: Option<u32>) -> GuestListSnapshot {
    let mut config = SessionConfig::default();
    if let Some(max) = max_guests {
        config.store = StoreConfig {
            max_guests: max as usize,
        };
    }
    let mut session = lock_session();
    *session = Session::new(config);
    to_snapshot(&session)
}

fn dispatch(action: Action) -> GuestActionResponse {
    let action_name = action.name();
    let mut session = lock_session();
    let outcome = session.dispatch(action);
    let (ok, message) = match &outcome {
        DispatchOutcome::Applied => (true, format!("{action_name} applied.")),
        DispatchOutcome::Rejected(err) => (false, format!("{action_name} rejected: {err}")),
        DispatchOutcome::Ignored => (false, format!("{action_name} ignored: no such guest.")),
    };
    GuestActionResponse {
        ok,
        message,
        snapshot: to_snapshot(&session),
    }
}

fn dispatch_for(guest_id: &str, build: impl FnOnce(GuestId) -> Action) -> GuestActionResponse {
    match parse_guest_id(guest_id) {
        Ok(id) => dispatch(build(id)),
        Err(message) => {
            warn!("event=ffi_dispatch module=ffi status=error reason=invalid_guest_id");
            let session = lock_session();
            GuestActionResponse {
                ok: false,
                message,
                snapshot: to_snapshot(&session),
            }
        }
    }
}

fn parse_guest_id(raw: &str) -> Result<GuestId, String> {
    GuestId::parse_str(raw.trim()).map_err(|err| format!("invalid guest_id `{raw}`: {err}"))
}

// A panic inside a previous call must not brick the session.
fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_snapshot(session: &Session) -> GuestListSnapshot {
    let now_ms = session.store().now_ms();
    let Screen { list, notification } = session.screen();
    GuestListSnapshot {
        rows: list.rows.into_iter().map(to_row_item).collect(),
        empty_message: list.empty_message,
        total_count: list.total_count as u32,
        attending_count: list.attending_count as u32,
        capacity: list.capacity as u32,
        filter: list.filter,
        notification: notification.map(|banner| to_notification_item(banner, now_ms)),
    }
}

fn to_row_item(row: GuestRow) -> GuestRowItem {
    let (name, editing) = match row.name {
        NameCell::Display { name } => (name, false),
        NameCell::Editing { draft } => (draft, true),
    };
    GuestRowItem {
        guest_id: row.id.to_string(),
        name,
        editing,
        category: row.category,
        created_label: row.created_label,
        status_label: row.status.label().to_string(),
        attending: row.status == GuestStatus::Attending,
    }
}

fn to_notification_item(notification: Notification, now_ms: i64) -> NotificationItem {
    NotificationItem {
        ticket: notification.ticket.value(),
        message: notification.message,
        kind: notification.kind.as_str().to_string(),
        remaining_ms: notification.dismiss_at.saturating_sub(now_ms).max(0),
        dismiss_at_epoch_ms: notification.dismiss_at,
    }
}
