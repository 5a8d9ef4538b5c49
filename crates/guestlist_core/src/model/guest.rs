//! Guest domain model.
//!
//! # Responsibility
//! - Define the canonical record shown by every list projection.
//! - Provide status toggling and name validation helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another guest.
//! - `id` and `created_at` never change after creation.
//! - `name` is stored trimmed and is never empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one guest record.
pub type GuestId = Uuid;

/// Category used when the caller submits an empty label.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Suggested labels for hosts that render a fixed category picker.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Family", "Friends", "Work", FALLBACK_CATEGORY];

/// Attendance state of one guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestStatus {
    Attending,
    NotAttending,
}

impl GuestStatus {
    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Attending => Self::NotAttending,
            Self::NotAttending => Self::Attending,
        }
    }

    /// Human-readable label used on status controls and notifications.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attending => "Attending",
            Self::NotAttending => "Not Attending",
        }
    }
}

impl Display for GuestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation error for guest input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestValidationError {
    /// Name is empty after trimming.
    EmptyName,
}

impl Display for GuestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "guest name cannot be empty"),
        }
    }
}

impl Error for GuestValidationError {}

/// Canonical guest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Stable ID used by every id-keyed action.
    pub id: GuestId,
    /// Display name, trimmed and non-empty.
    pub name: String,
    pub status: GuestStatus,
    /// Free-form label, trimmed.
    pub category: String,
    /// Unix epoch milliseconds at creation.
    pub created_at: i64,
}

impl Guest {
    /// Creates an attending guest with a generated stable ID.
    ///
    /// # Errors
    /// - Returns `GuestValidationError::EmptyName` when `name` trims to empty.
    pub fn new(
        name: &str,
        category: &str,
        created_at: i64,
    ) -> Result<Self, GuestValidationError> {
        Self::with_id(Uuid::new_v4(), name, category, created_at)
    }

    /// Creates a guest with a caller-provided ID.
    pub fn with_id(
        id: GuestId,
        name: &str,
        category: &str,
        created_at: i64,
    ) -> Result<Self, GuestValidationError> {
        Ok(Self {
            id,
            name: normalize_name(name)?,
            status: GuestStatus::Attending,
            category: normalize_category(category),
            created_at,
        })
    }

    /// Flips attendance in place and returns the new status.
    pub fn toggle_status(&mut self) -> GuestStatus {
        self.status = self.status.toggled();
        self.status
    }

    /// Replaces the name, leaving every other field untouched.
    pub fn rename(&mut self, name: &str) -> Result<(), GuestValidationError> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    /// Returns whether name or category contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle_lower)
            || self.category.to_lowercase().contains(needle_lower)
    }
}

/// Trims a name and rejects empty input.
pub fn normalize_name(name: &str) -> Result<String, GuestValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GuestValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Trims a category label, falling back to `FALLBACK_CATEGORY`.
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_category, Guest, GuestStatus, GuestValidationError};

    #[test]
    fn new_guest_is_attending_and_trimmed() {
        let guest = Guest::new("  Alice ", " Family ", 42).expect("valid guest");
        assert_eq!(guest.name, "Alice");
        assert_eq!(guest.category, "Family");
        assert_eq!(guest.status, GuestStatus::Attending);
        assert_eq!(guest.created_at, 42);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Guest::new(" \t ", "Work", 0).expect_err("blank name must fail");
        assert_eq!(err, GuestValidationError::EmptyName);
    }

    #[test]
    fn empty_category_falls_back() {
        assert_eq!(normalize_category("   "), "Other");
    }

    #[test]
    fn status_labels_match_controls() {
        assert_eq!(GuestStatus::Attending.label(), "Attending");
        assert_eq!(GuestStatus::NotAttending.to_string(), "Not Attending");
    }

    #[test]
    fn matches_name_or_category_case_insensitively() {
        let guest = Guest::new("Eve", "Family", 0).expect("valid guest");
        assert!(guest.matches("fam"));
        assert!(guest.matches("ev"));
        assert!(guest.matches(""));
        assert!(!guest.matches("zzz"));
    }
}
