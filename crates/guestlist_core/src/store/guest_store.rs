//! Guest store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/remove/toggle/rename/filter/query over owned records.
//! - Keep capacity and validation rules inside the store boundary.
//!
//! # Invariants
//! - Write paths validate input before touching the collection.
//! - A rejected operation leaves the collection unchanged.
//! - `query` returns a fresh vector in insertion order.

use crate::model::guest::{Guest, GuestId, GuestStatus, GuestValidationError};
use crate::store::clock::{Clock, SystemClock};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default maximum number of guests in one list.
pub const MAX_GUESTS: usize = 10;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for guest mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input failed record validation.
    Validation(GuestValidationError),
    /// Add attempted while the list is full.
    Capacity { max: usize },
    /// Target guest does not exist.
    NotFound(GuestId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Capacity { max } => write!(f, "guest list limit of {max} reached"),
            Self::NotFound(id) => write!(f, "guest not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Capacity { .. } | Self::NotFound(_) => None,
        }
    }
}

impl From<GuestValidationError> for StoreError {
    fn from(value: GuestValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Upper bound on live guests.
    pub max_guests: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_guests: MAX_GUESTS,
        }
    }
}

/// Ordered in-memory guest collection plus the current filter.
#[derive(Debug)]
pub struct GuestStore<C: Clock = SystemClock> {
    guests: Vec<Guest>,
    filter: String,
    config: StoreConfig,
    clock: C,
}

impl GuestStore<SystemClock> {
    /// Creates an empty store with default limits and the system clock.
    pub fn new() -> Self {
        Self::with_clock(StoreConfig::default(), SystemClock)
    }
}

impl Default for GuestStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GuestStore<C> {
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        Self {
            guests: Vec::new(),
            filter: String::new(),
            config,
            clock,
        }
    }

    /// Adds one attending guest at the end of the list.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `name` trims to empty.
    /// - `StoreError::Capacity` when the list is already full.
    pub fn add(&mut self, name: &str, category: &str) -> StoreResult<Guest> {
        let guest = Guest::new(name, category, self.clock.now_ms()).map_err(|err| {
            warn!("event=guest_add module=store status=rejected reason=empty_name");
            StoreError::from(err)
        })?;

        if self.is_full() {
            warn!(
                "event=guest_add module=store status=rejected reason=capacity max={}",
                self.config.max_guests
            );
            return Err(StoreError::Capacity {
                max: self.config.max_guests,
            });
        }

        self.guests.push(guest.clone());
        info!(
            "event=guest_add module=store status=ok guest_id={} count={}",
            guest.id,
            self.guests.len()
        );
        Ok(guest)
    }

    /// Removes the matching guest. Absent IDs are a no-op.
    pub fn remove(&mut self, id: GuestId) -> Option<Guest> {
        let index = self.position(id)?;
        let removed = self.guests.remove(index);
        info!(
            "event=guest_remove module=store status=ok guest_id={} count={}",
            id,
            self.guests.len()
        );
        Some(removed)
    }

    /// Flips attendance for the matching guest.
    pub fn toggle_status(&mut self, id: GuestId) -> Option<Guest> {
        let guest = self.guests.iter_mut().find(|guest| guest.id == id)?;
        let status = guest.toggle_status();
        debug!("event=guest_toggle module=store status=ok guest_id={id} rsvp={status:?}");
        Some(guest.clone())
    }

    /// Replaces the name of the matching guest in place.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `new_name` trims to empty.
    /// - `StoreError::NotFound` when no guest has this ID.
    pub fn rename(&mut self, id: GuestId, new_name: &str) -> StoreResult<Guest> {
        let guest = self
            .guests
            .iter_mut()
            .find(|guest| guest.id == id)
            .ok_or(StoreError::NotFound(id))?;
        guest.rename(new_name)?;
        debug!("event=guest_rename module=store status=ok guest_id={id}");
        Ok(guest.clone())
    }

    /// Stores the filter verbatim; case folding happens in `query`.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Returns guests whose name or category contains the filter.
    pub fn query(&self) -> Vec<Guest> {
        let needle = self.filter.to_lowercase();
        self.guests
            .iter()
            .filter(|guest| guest.matches(needle.as_str()))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: GuestId) -> Option<&Guest> {
        self.guests.iter().find(|guest| guest.id == id)
    }

    /// All guests in insertion order, ignoring the filter.
    pub fn all(&self) -> &[Guest] {
        &self.guests
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.guests.len() >= self.config.max_guests
    }

    pub fn max_guests(&self) -> usize {
        self.config.max_guests
    }

    pub fn attending_count(&self) -> usize {
        self.guests
            .iter()
            .filter(|guest| guest.status == GuestStatus::Attending)
            .count()
    }

    /// Current time from the store clock.
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    fn position(&self, id: GuestId) -> Option<usize> {
        self.guests.iter().position(|guest| guest.id == id)
    }
}
