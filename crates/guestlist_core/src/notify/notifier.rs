//! Single-slot notification banner with scheduled dismissal.
//!
//! # Responsibility
//! - Hold at most one visible message with its severity kind.
//! - Track the dismissal deadline of the visible message.
//!
//! # Invariants
//! - A new notification replaces both content and deadline (last call wins).
//! - A dismissal for a superseded ticket is a no-op.
//! - Tickets are strictly increasing per notifier.

use log::debug;
use serde::{Deserialize, Serialize};

/// Default banner lifetime in milliseconds.
pub const DEFAULT_NOTIFY_DURATION_MS: u64 = 3_000;

/// Severity kind, used by hosts for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Handle for one scheduled dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationTicket(u64);

impl NotificationTicket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Visible banner state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub ticket: NotificationTicket,
    pub message: String,
    pub kind: NotificationKind,
    /// Epoch milliseconds when the banner was shown.
    pub shown_at: i64,
    /// Epoch milliseconds after which the banner is hidden.
    pub dismiss_at: i64,
}

/// Banner slot plus the pending dismissal schedule.
#[derive(Debug, Default)]
pub struct Notifier {
    last_ticket: u64,
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` immediately, superseding any visible banner.
    ///
    /// Returns the ticket the host should hand back to `dismiss` when its
    /// timer fires after `duration_ms`.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
        now_ms: i64,
    ) -> NotificationTicket {
        self.last_ticket += 1;
        let ticket = NotificationTicket(self.last_ticket);
        let duration = i64::try_from(duration_ms).unwrap_or(i64::MAX);
        self.current = Some(Notification {
            ticket,
            message: message.into(),
            kind,
            shown_at: now_ms,
            dismiss_at: now_ms.saturating_add(duration),
        });
        debug!(
            "event=notify module=notify status=shown ticket={} kind={}",
            ticket.value(),
            kind.as_str()
        );
        ticket
    }

    /// Hides the banner if `ticket` is still the visible one.
    ///
    /// Returns whether the banner was hidden by this call.
    pub fn dismiss(&mut self, ticket: NotificationTicket) -> bool {
        match &self.current {
            Some(current) if current.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Hides the banner once its deadline has passed.
    pub fn tick(&mut self, now_ms: i64) -> bool {
        match &self.current {
            Some(current) if now_ms >= current.dismiss_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the banner visible at `now_ms`, if any.
    pub fn visible(&self, now_ms: i64) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|current| now_ms < current.dismiss_at)
    }

    /// Returns the stored banner regardless of its deadline.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
