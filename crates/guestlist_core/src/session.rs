//! Guest list session: the owned state behind one list screen.
//!
//! # Responsibility
//! - Route id-keyed actions into the store, edit state and notifier.
//! - Recover every store error locally and surface it as a notification.
//! - Produce `Screen` snapshots for hosts after each action.
//!
//! # Invariants
//! - `dispatch` never returns an error and never panics on user input.
//! - Failed commits keep edit mode and the draft intact.
//! - Sessions share no state; independent instances never interfere.

use crate::action::Action;
use crate::model::guest::GuestId;
use crate::notify::notifier::{
    Notification, NotificationKind, NotificationTicket, Notifier, DEFAULT_NOTIFY_DURATION_MS,
};
use crate::store::clock::{Clock, SystemClock};
use crate::store::guest_store::{GuestStore, StoreConfig, StoreError};
use crate::view::edit::EditState;
use crate::view::render::{render, ListView};
use chrono::{Local, TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const MSG_GUEST_ADDED: &str = "Guest added successfully!";
pub const MSG_GUEST_REMOVED: &str = "Guest removed.";
pub const MSG_GUEST_RENAMED: &str = "Guest name updated.";
pub const MSG_EMPTY_NAME: &str = "Please enter a guest name.";
pub const MSG_GUEST_NOT_FOUND: &str = "Guest not found.";

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub store: StoreConfig,
    /// Banner lifetime for notifications raised by actions.
    pub notify_duration_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            notify_duration_ms: DEFAULT_NOTIFY_DURATION_MS,
        }
    }
}

/// Result of one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State changed (or a filter/draft was stored).
    Applied,
    /// The store rejected the action; an error notification was shown.
    Rejected(StoreError),
    /// Target guest or edit mode was absent; nothing changed.
    Ignored,
}

impl DispatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Everything a host needs to draw after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub list: ListView,
    pub notification: Option<Notification>,
}

/// Owned guest list state for one screen.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    store: GuestStore<C>,
    edits: EditState,
    notifier: Notifier,
    notify_duration_ms: u64,
}

impl Session<SystemClock> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(config: SessionConfig, clock: C) -> Self {
        Self {
            store: GuestStore::with_clock(config.store, clock),
            edits: EditState::new(),
            notifier: Notifier::new(),
            notify_duration_ms: config.notify_duration_ms,
        }
    }

    /// Applies one user action.
    pub fn dispatch(&mut self, action: Action) -> DispatchOutcome {
        let action_name = action.name();
        let target = action
            .target()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let outcome = match action {
            Action::AddGuest { name, category } => self.add_guest(&name, &category),
            Action::SetFilter { text } => {
                self.store.set_filter(text);
                DispatchOutcome::Applied
            }
            Action::ToggleStatus { id } => self.toggle_status(id),
            Action::BeginEdit { id } => self.begin_edit(id),
            Action::UpdateDraft { id, text } => {
                if self.edits.update(id, text) {
                    DispatchOutcome::Applied
                } else {
                    DispatchOutcome::Ignored
                }
            }
            Action::SaveEdit { id } => self.save_edit(id),
            Action::SubmitRename { id, name } => self.submit_rename(id, name),
            Action::CancelEdit { id } => match self.edits.end(id) {
                Some(_) => DispatchOutcome::Applied,
                None => DispatchOutcome::Ignored,
            },
            Action::Remove { id } => self.remove(id),
        };

        debug!(
            "event=dispatch module=session action={} guest_id={} status={}",
            action_name,
            target,
            outcome_label(&outcome)
        );
        outcome
    }

    /// Shows a banner, replacing any visible one.
    ///
    /// `duration_ms = None` uses the session default (3000 ms unless
    /// configured otherwise).
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: Option<u64>,
    ) -> NotificationTicket {
        let duration = duration_ms.unwrap_or(self.notify_duration_ms);
        let now = self.store.now_ms();
        self.notifier.notify(message, kind, duration, now)
    }

    /// Timer callback: hides the banner if `ticket` is still current.
    pub fn dismiss_notification(&mut self, ticket: NotificationTicket) -> bool {
        self.notifier.dismiss(ticket)
    }

    /// Hides the banner once its deadline has passed.
    pub fn tick(&mut self) -> bool {
        let now = self.store.now_ms();
        self.notifier.tick(now)
    }

    /// Visible banner at the current clock time.
    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.visible(self.store.now_ms())
    }

    /// Renders the list with creation times in local time.
    pub fn view(&self) -> ListView {
        self.view_in(&Local)
    }

    pub fn view_in<Tz>(&self, tz: &Tz) -> ListView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        render(&self.store, &self.edits, tz)
    }

    pub fn screen(&self) -> Screen {
        self.screen_in(&Local)
    }

    pub fn screen_in<Tz>(&self, tz: &Tz) -> Screen
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Screen {
            list: self.view_in(tz),
            notification: self.notification().cloned(),
        }
    }

    pub fn store(&self) -> &GuestStore<C> {
        &self.store
    }

    pub fn edits(&self) -> &EditState {
        &self.edits
    }

    fn add_guest(&mut self, name: &str, category: &str) -> DispatchOutcome {
        match self.store.add(name, category) {
            Ok(_) => {
                self.notify(MSG_GUEST_ADDED, NotificationKind::Success, None);
                DispatchOutcome::Applied
            }
            Err(err) => self.reject(err),
        }
    }

    fn toggle_status(&mut self, id: GuestId) -> DispatchOutcome {
        match self.store.toggle_status(id) {
            Some(guest) => {
                let message = format!("Guest RSVP changed to '{}'.", guest.status.label());
                self.notify(message, NotificationKind::Info, None);
                DispatchOutcome::Applied
            }
            None => DispatchOutcome::Ignored,
        }
    }

    fn begin_edit(&mut self, id: GuestId) -> DispatchOutcome {
        match self.store.get(id) {
            Some(guest) => {
                self.edits.begin(id, &guest.name);
                DispatchOutcome::Applied
            }
            None => DispatchOutcome::Ignored,
        }
    }

    fn save_edit(&mut self, id: GuestId) -> DispatchOutcome {
        let Some(draft) = self.edits.draft(id).map(str::to_string) else {
            return DispatchOutcome::Ignored;
        };

        match self.store.rename(id, &draft) {
            Ok(_) => {
                self.edits.end(id);
                self.notify(MSG_GUEST_RENAMED, NotificationKind::Success, None);
                DispatchOutcome::Applied
            }
            Err(err @ StoreError::NotFound(_)) => {
                self.edits.end(id);
                self.reject(err)
            }
            Err(err) => self.reject(err),
        }
    }

    // A rejected rename only leaves edit mode open if it was open before.
    fn submit_rename(&mut self, id: GuestId, name: String) -> DispatchOutcome {
        let was_editing = self.edits.is_editing(id);
        self.edits.begin(id, &name);
        self.edits.update(id, name);
        let outcome = self.save_edit(id);
        if !was_editing {
            self.edits.end(id);
        }
        outcome
    }

    fn remove(&mut self, id: GuestId) -> DispatchOutcome {
        self.edits.end(id);
        match self.store.remove(id) {
            Some(_) => {
                self.notify(MSG_GUEST_REMOVED, NotificationKind::Info, None);
                DispatchOutcome::Applied
            }
            None => DispatchOutcome::Ignored,
        }
    }

    fn reject(&mut self, err: StoreError) -> DispatchOutcome {
        self.notify(error_message(&err), NotificationKind::Error, None);
        DispatchOutcome::Rejected(err)
    }
}

/// User-facing text for a store error.
pub fn error_message(err: &StoreError) -> String {
    match err {
        StoreError::Validation(_) => MSG_EMPTY_NAME.to_string(),
        StoreError::Capacity { max } => {
            format!("Guest list limit of {max} reached! Cannot add more guests.")
        }
        StoreError::NotFound(_) => MSG_GUEST_NOT_FOUND.to_string(),
    }
}

fn outcome_label(outcome: &DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::Applied => "ok",
        DispatchOutcome::Rejected(_) => "rejected",
        DispatchOutcome::Ignored => "ignored",
    }
}
