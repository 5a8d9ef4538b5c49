//! Pure list rendering.
//!
//! # Responsibility
//! - Map `(store, edit state)` to a `ListView` description.
//! - Attach the id-keyed action each row control dispatches.
//!
//! # Invariants
//! - Rows follow `GuestStore::query` order.
//! - Rows in edit mode expose only the save control.
//! - Exactly one of `rows` / `empty_message` is populated.

use crate::action::Action;
use crate::model::guest::{Guest, GuestId, GuestStatus};
use crate::store::clock::Clock;
use crate::store::guest_store::GuestStore;
use crate::view::edit::EditState;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Shown when the store holds no guests at all.
pub const EMPTY_LIST_MESSAGE: &str = "No guests added yet. Start by adding one!";
/// Shown when guests exist but none match the filter.
pub const NO_MATCH_MESSAGE: &str = "No guests found matching your search criteria.";

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Whole visible list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub rows: Vec<GuestRow>,
    /// Placeholder text when `rows` is empty.
    pub empty_message: Option<String>,
    /// Unfiltered guest count.
    pub total_count: usize,
    pub attending_count: usize,
    pub capacity: usize,
    pub filter: String,
}

/// One visible guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRow {
    pub id: GuestId,
    pub name: NameCell,
    pub category: String,
    pub created_label: String,
    pub status: GuestStatus,
    pub controls: Vec<RowControl>,
}

impl GuestRow {
    pub fn is_editing(&self) -> bool {
        matches!(self.name, NameCell::Editing { .. })
    }

    /// Finds the control of `kind`, if the row exposes one.
    pub fn control(&self, kind: ControlKind) -> Option<&RowControl> {
        self.controls.iter().find(|control| control.kind == kind)
    }
}

/// Name display or editable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NameCell {
    Display { name: String },
    Editing { draft: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    ToggleStatus,
    Edit,
    Remove,
    Save,
}

/// Clickable control with the action it dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowControl {
    pub kind: ControlKind,
    pub label: String,
    pub action: Action,
}

/// Rebuilds the visible list from the current store and edit state.
///
/// Creation times are formatted in `tz`.
pub fn render<C, Tz>(store: &GuestStore<C>, edits: &EditState, tz: &Tz) -> ListView
where
    C: Clock,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rows = store
        .query()
        .into_iter()
        .map(|guest| render_row(guest, edits, tz))
        .collect::<Vec<_>>();

    let empty_message = if !rows.is_empty() {
        None
    } else if store.is_empty() {
        Some(EMPTY_LIST_MESSAGE.to_string())
    } else {
        Some(NO_MATCH_MESSAGE.to_string())
    };

    ListView {
        rows,
        empty_message,
        total_count: store.len(),
        attending_count: store.attending_count(),
        capacity: store.max_guests(),
        filter: store.filter().to_string(),
    }
}

fn render_row<Tz>(guest: Guest, edits: &EditState, tz: &Tz) -> GuestRow
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let id = guest.id;
    let created_label = format_created_at(guest.created_at, tz);

    let (name, controls) = match edits.draft(id) {
        Some(draft) => (
            NameCell::Editing {
                draft: draft.to_string(),
            },
            vec![RowControl {
                kind: ControlKind::Save,
                label: "Save".to_string(),
                action: Action::SaveEdit { id },
            }],
        ),
        None => (
            NameCell::Display { name: guest.name },
            vec![
                RowControl {
                    kind: ControlKind::ToggleStatus,
                    label: guest.status.label().to_string(),
                    action: Action::ToggleStatus { id },
                },
                RowControl {
                    kind: ControlKind::Edit,
                    label: "Edit".to_string(),
                    action: Action::BeginEdit { id },
                },
                RowControl {
                    kind: ControlKind::Remove,
                    label: "Remove".to_string(),
                    action: Action::Remove { id },
                },
            ],
        ),
    };

    GuestRow {
        id,
        name,
        category: guest.category,
        created_label,
        status: guest.status,
        controls,
    }
}

/// Formats epoch milliseconds as a short local date-time label.
pub fn format_created_at<Tz>(epoch_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc
            .with_timezone(tz)
            .format(CREATED_AT_FORMAT)
            .to_string(),
        None => "unknown time".to_string(),
    }
}
