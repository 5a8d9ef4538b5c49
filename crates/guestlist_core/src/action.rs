//! Id-keyed user actions.
//!
//! Every user interaction is expressed as one `Action` value. Row controls in
//! the rendered view carry the action they trigger, so a host only has to
//! hand the value back to `Session::dispatch`.

use crate::model::guest::GuestId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Submit of the new-guest form.
    AddGuest { name: String, category: String },
    /// Live filter input changed.
    SetFilter { text: String },
    ToggleStatus { id: GuestId },
    /// Enter inline edit mode, pre-filled with the current name.
    BeginEdit { id: GuestId },
    /// Edit field content changed.
    UpdateDraft { id: GuestId, text: String },
    /// Save button or accept keystroke on an edit field.
    SaveEdit { id: GuestId },
    /// Rename with an explicit value, committing like `SaveEdit`.
    SubmitRename { id: GuestId, name: String },
    /// Leave edit mode without changing the record.
    CancelEdit { id: GuestId },
    Remove { id: GuestId },
}

impl Action {
    /// Stable event name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddGuest { .. } => "add_guest",
            Self::SetFilter { .. } => "set_filter",
            Self::ToggleStatus { .. } => "toggle_status",
            Self::BeginEdit { .. } => "begin_edit",
            Self::UpdateDraft { .. } => "update_draft",
            Self::SaveEdit { .. } => "save_edit",
            Self::SubmitRename { .. } => "submit_rename",
            Self::CancelEdit { .. } => "cancel_edit",
            Self::Remove { .. } => "remove",
        }
    }

    /// Target guest, when the action is row-scoped.
    pub fn target(&self) -> Option<GuestId> {
        match self {
            Self::AddGuest { .. } | Self::SetFilter { .. } => None,
            Self::ToggleStatus { id }
            | Self::BeginEdit { id }
            | Self::UpdateDraft { id, .. }
            | Self::SaveEdit { id }
            | Self::SubmitRename { id, .. }
            | Self::CancelEdit { id }
            | Self::Remove { id } => Some(*id),
        }
    }
}
