use guestlist_core::{
    GuestStatus, GuestStore, GuestValidationError, ManualClock, StoreConfig, StoreError,
    MAX_GUESTS,
};
use std::collections::HashSet;

fn new_store() -> GuestStore<ManualClock> {
    GuestStore::with_clock(StoreConfig::default(), ManualClock::new(1_700_000_000_000))
}

fn names(store: &GuestStore<ManualClock>) -> Vec<String> {
    store.query().into_iter().map(|guest| guest.name).collect()
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = new_store();
    store.add("Alice", "Family").unwrap();
    store.add("Bob", "Friends").unwrap();

    assert_eq!(names(&store), vec!["Alice", "Bob"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn eleventh_add_fails_with_capacity_error() {
    let mut store = new_store();
    for index in 0..MAX_GUESTS {
        store.add(&format!("Guest {index}"), "Work").unwrap();
    }

    let err = store.add("One too many", "Work").unwrap_err();
    assert_eq!(err, StoreError::Capacity { max: 10 });
    assert_eq!(store.len(), 10);
    assert!(store.is_full());
}

#[test]
fn blank_name_is_rejected_and_store_unchanged() {
    let mut store = new_store();
    store.add("Alice", "Family").unwrap();

    let err = store.add("   ", "Family").unwrap_err();
    assert_eq!(err, StoreError::Validation(GuestValidationError::EmptyName));
    assert_eq!(names(&store), vec!["Alice"]);
}

#[test]
fn ids_are_unique() {
    let mut store = new_store();
    for index in 0..MAX_GUESTS {
        store.add(&format!("Guest {index}"), "").unwrap();
    }
    let ids = store.all().iter().map(|guest| guest.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), MAX_GUESTS);
}

#[test]
fn toggle_status_is_an_involution() {
    let mut store = new_store();
    let carl = store.add("Carl", "Work").unwrap();
    assert_eq!(carl.status, GuestStatus::Attending);

    let toggled = store.toggle_status(carl.id).unwrap();
    assert_eq!(toggled.status, GuestStatus::NotAttending);
    let restored = store.toggle_status(carl.id).unwrap();
    assert_eq!(restored.status, GuestStatus::Attending);
}

#[test]
fn toggle_unknown_id_returns_none() {
    let mut store = new_store();
    assert!(store.toggle_status(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn rename_validates_and_preserves_other_fields() {
    let clock = ManualClock::new(1_000);
    let mut store = GuestStore::with_clock(StoreConfig::default(), clock.clone());
    let dana = store.add("Dana", "Work").unwrap();
    store.toggle_status(dana.id).unwrap();
    clock.advance(60_000);

    let err = store.rename(dana.id, "").unwrap_err();
    assert_eq!(err, StoreError::Validation(GuestValidationError::EmptyName));
    assert_eq!(store.get(dana.id).unwrap().name, "Dana");

    let renamed = store.rename(dana.id, "Dana Lee").unwrap();
    assert_eq!(renamed.name, "Dana Lee");
    assert_eq!(renamed.id, dana.id);
    assert_eq!(renamed.category, "Work");
    assert_eq!(renamed.created_at, 1_000);
    assert_eq!(renamed.status, GuestStatus::NotAttending);
}

#[test]
fn remove_is_noop_for_unknown_id() {
    let mut store = new_store();
    let alice = store.add("Alice", "Family").unwrap();

    assert!(store.remove(uuid::Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);

    let removed = store.remove(alice.id).unwrap();
    assert_eq!(removed.id, alice.id);
    assert!(store.is_empty());
    assert!(store.remove(alice.id).is_none());
}

#[test]
fn remove_frees_capacity() {
    let mut store = GuestStore::with_clock(StoreConfig { max_guests: 1 }, ManualClock::new(0));
    let only = store.add("Solo", "Family").unwrap();
    assert!(store.add("Second", "Family").is_err());

    store.remove(only.id);
    store.add("Second", "Family").unwrap();
    assert_eq!(names(&store), vec!["Second"]);
}

#[test]
fn filter_matches_name_or_category_case_insensitively() {
    let mut store = new_store();
    store.add("Eve", "Family").unwrap();
    store.add("Frank", "Work").unwrap();
    store.add("Famke", "Friends").unwrap();

    store.set_filter("fam");
    assert_eq!(names(&store), vec!["Eve", "Famke"]);

    store.set_filter("WORK");
    assert_eq!(names(&store), vec!["Frank"]);

    store.set_filter("zzz");
    assert!(store.query().is_empty());

    store.set_filter("");
    assert_eq!(names(&store), vec!["Eve", "Frank", "Famke"]);
}

#[test]
fn query_returns_fresh_snapshot() {
    let mut store = new_store();
    let alice = store.add("Alice", "Family").unwrap();
    let before = store.query();

    store.rename(alice.id, "Alicia").unwrap();
    assert_eq!(before[0].name, "Alice");
    assert_eq!(store.query()[0].name, "Alicia");
}

#[test]
fn attending_count_tracks_toggles() {
    let mut store = new_store();
    let alice = store.add("Alice", "Family").unwrap();
    store.add("Bob", "Friends").unwrap();
    assert_eq!(store.attending_count(), 2);

    store.toggle_status(alice.id);
    assert_eq!(store.attending_count(), 1);
}
