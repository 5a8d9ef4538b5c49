//! Inline edit mode keyed by guest ID.

use crate::model::guest::GuestId;
use std::collections::HashMap;

/// Per-record edit drafts. A record is in edit mode while it has a draft.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    drafts: HashMap<GuestId, String>,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters edit mode with the draft pre-filled.
    ///
    /// Re-entering an active edit keeps the existing draft.
    pub fn begin(&mut self, id: GuestId, current_name: &str) {
        self.drafts
            .entry(id)
            .or_insert_with(|| current_name.to_string());
    }

    /// Replaces the draft. Returns `false` when `id` is not being edited.
    pub fn update(&mut self, id: GuestId, text: impl Into<String>) -> bool {
        match self.drafts.get_mut(&id) {
            Some(draft) => {
                *draft = text.into();
                true
            }
            None => false,
        }
    }

    pub fn draft(&self, id: GuestId) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }

    pub fn is_editing(&self, id: GuestId) -> bool {
        self.drafts.contains_key(&id)
    }

    /// Leaves edit mode, discarding the draft.
    pub fn end(&mut self, id: GuestId) -> Option<String> {
        self.drafts.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
