use chrono::Utc;
use guestlist_core::{
    Action, DispatchOutcome, GuestStatus, ManualClock, NameCell, NotificationKind, Session,
    SessionConfig, StoreConfig, StoreError,
};

fn new_session() -> (Session<ManualClock>, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    let session = Session::with_clock(SessionConfig::default(), clock.clone());
    (session, clock)
}

fn add(session: &mut Session<ManualClock>, name: &str, category: &str) -> DispatchOutcome {
    session.dispatch(Action::AddGuest {
        name: name.to_string(),
        category: category.to_string(),
    })
}

fn banner(session: &Session<ManualClock>) -> (String, NotificationKind) {
    let notification = session.notification().expect("a banner should be visible");
    (notification.message.clone(), notification.kind)
}

#[test]
fn add_notifies_success_and_renders_row() {
    let (mut session, _clock) = new_session();
    assert!(add(&mut session, "Alice", "Family").is_applied());
    assert!(add(&mut session, "Bob", "Friends").is_applied());

    assert_eq!(
        banner(&session),
        ("Guest added successfully!".to_string(), NotificationKind::Success)
    );
    let screen = session.screen_in(&Utc);
    assert_eq!(screen.list.total_count, 2);
    assert_eq!(screen.list.rows.len(), 2);
    assert!(screen.notification.is_some());
}

#[test]
fn empty_name_surfaces_error_notification() {
    let (mut session, _clock) = new_session();
    let outcome = add(&mut session, "  ", "Family");

    assert!(matches!(outcome, DispatchOutcome::Rejected(StoreError::Validation(_))));
    assert_eq!(
        banner(&session),
        ("Please enter a guest name.".to_string(), NotificationKind::Error)
    );
    assert!(session.store().is_empty());
}

#[test]
fn capacity_surfaces_error_notification() {
    let (mut session, _clock) = new_session();
    for index in 0..10 {
        assert!(add(&mut session, &format!("Guest {index}"), "Work").is_applied());
    }

    let outcome = add(&mut session, "Eleven", "Work");
    assert_eq!(outcome, DispatchOutcome::Rejected(StoreError::Capacity { max: 10 }));
    assert_eq!(
        banner(&session),
        (
            "Guest list limit of 10 reached! Cannot add more guests.".to_string(),
            NotificationKind::Error
        )
    );
    assert_eq!(session.store().len(), 10);
}

#[test]
fn custom_capacity_is_reported_in_message() {
    let config = SessionConfig {
        store: StoreConfig { max_guests: 1 },
        ..SessionConfig::default()
    };
    let mut session = Session::with_clock(config, ManualClock::new(0));
    add(&mut session, "Solo", "Family");
    add(&mut session, "Extra", "Family");
    assert_eq!(
        session.notification().unwrap().message,
        "Guest list limit of 1 reached! Cannot add more guests."
    );
}

#[test]
fn toggle_reports_new_status() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Carl", "Work");
    let id = session.store().all()[0].id;

    session.dispatch(Action::ToggleStatus { id });
    assert_eq!(session.store().get(id).unwrap().status, GuestStatus::NotAttending);
    assert_eq!(
        banner(&session),
        (
            "Guest RSVP changed to 'Not Attending'.".to_string(),
            NotificationKind::Info
        )
    );

    session.dispatch(Action::ToggleStatus { id });
    assert_eq!(session.store().get(id).unwrap().status, GuestStatus::Attending);
    assert_eq!(banner(&session).0, "Guest RSVP changed to 'Attending'.");
}

#[test]
fn inline_edit_rejects_empty_and_keeps_edit_mode() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Dana", "Work");
    let dana = session.store().all()[0].clone();

    session.dispatch(Action::BeginEdit { id: dana.id });
    assert_eq!(session.edits().draft(dana.id), Some("Dana"));

    session.dispatch(Action::UpdateDraft {
        id: dana.id,
        text: "   ".to_string(),
    });
    let outcome = session.dispatch(Action::SaveEdit { id: dana.id });
    assert!(matches!(outcome, DispatchOutcome::Rejected(StoreError::Validation(_))));
    assert_eq!(banner(&session).1, NotificationKind::Error);
    assert!(session.edits().is_editing(dana.id));
    assert_eq!(session.edits().draft(dana.id), Some("   "));
    assert_eq!(session.store().get(dana.id).unwrap().name, "Dana");

    let outcome = session.dispatch(Action::SubmitRename {
        id: dana.id,
        name: "Dana Lee".to_string(),
    });
    assert!(outcome.is_applied());
    assert!(!session.edits().is_editing(dana.id));
    assert_eq!(
        banner(&session),
        ("Guest name updated.".to_string(), NotificationKind::Success)
    );

    let renamed = session.store().get(dana.id).unwrap();
    assert_eq!(renamed.name, "Dana Lee");
    assert_eq!(renamed.category, dana.category);
    assert_eq!(renamed.created_at, dana.created_at);
}

#[test]
fn cancel_edit_reverts_to_display_without_change() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Eve", "Family");
    let id = session.store().all()[0].id;

    session.dispatch(Action::BeginEdit { id });
    session.dispatch(Action::UpdateDraft {
        id,
        text: "Evelyn".to_string(),
    });
    assert!(session.dispatch(Action::CancelEdit { id }).is_applied());

    let view = session.view_in(&Utc);
    assert_eq!(
        view.rows[0].name,
        NameCell::Display {
            name: "Eve".to_string()
        }
    );
}

#[test]
fn remove_drops_edit_state_and_notifies() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Eve", "Family");
    let id = session.store().all()[0].id;
    session.dispatch(Action::BeginEdit { id });

    assert!(session.dispatch(Action::Remove { id }).is_applied());
    assert!(session.edits().is_empty());
    assert_eq!(
        banner(&session),
        ("Guest removed.".to_string(), NotificationKind::Info)
    );
    assert_eq!(
        session.view_in(&Utc).empty_message.as_deref(),
        Some("No guests added yet. Start by adding one!")
    );
}

#[test]
fn filter_action_updates_view() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Eve", "Family");
    session.dispatch(Action::SetFilter {
        text: "fam".to_string(),
    });
    assert_eq!(session.view_in(&Utc).rows.len(), 1);

    session.dispatch(Action::SetFilter {
        text: "zzz".to_string(),
    });
    let view = session.view_in(&Utc);
    assert!(view.rows.is_empty());
    assert_eq!(
        view.empty_message.as_deref(),
        Some("No guests found matching your search criteria.")
    );
}

#[test]
fn notification_auto_dismisses_and_last_call_wins() {
    let (mut session, clock) = new_session();
    add(&mut session, "Alice", "Family");
    let first = session.notification().unwrap().ticket;

    clock.advance(2_000);
    add(&mut session, "", "Family");
    let second = session.notification().unwrap().ticket;
    assert_ne!(first, second);

    clock.advance(1_000);
    assert!(!session.dismiss_notification(first));
    assert!(!session.tick());
    assert_eq!(banner(&session).1, NotificationKind::Error);

    clock.advance(2_000);
    assert!(session.notification().is_none());
    assert!(session.tick());
    assert!(!session.dismiss_notification(second));
}

#[test]
fn explicit_notify_honours_custom_duration() {
    let (mut session, clock) = new_session();
    let ticket = session.notify("Saved draft", NotificationKind::Info, Some(500));
    clock.advance(499);
    assert_eq!(session.notification().unwrap().ticket, ticket);
    clock.advance(1);
    assert!(session.notification().is_none());
}

#[test]
fn sessions_are_independent() {
    let (mut first, _) = new_session();
    let (second, _) = new_session();
    add(&mut first, "Alice", "Family");
    assert_eq!(first.store().len(), 1);
    assert!(second.store().is_empty());
}

#[test]
fn blank_submit_rename_outside_edit_mode_does_not_open_editor() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Dana", "Work");
    let id = session.store().all()[0].id;

    let outcome = session.dispatch(Action::SubmitRename {
        id,
        name: "  ".to_string(),
    });
    assert!(matches!(outcome, DispatchOutcome::Rejected(StoreError::Validation(_))));
    assert_eq!(banner(&session).1, NotificationKind::Error);
    assert!(!session.edits().is_editing(id));
    assert_eq!(
        session.view_in(&Utc).rows[0].name,
        NameCell::Display {
            name: "Dana".to_string()
        }
    );
}

#[test]
fn blank_submit_rename_inside_edit_mode_keeps_editor_open() {
    let (mut session, _clock) = new_session();
    add(&mut session, "Dana", "Work");
    let id = session.store().all()[0].id;
    session.dispatch(Action::BeginEdit { id });

    session.dispatch(Action::SubmitRename {
        id,
        name: "".to_string(),
    });
    assert!(session.edits().is_editing(id));
    assert_eq!(session.edits().draft(id), Some(""));
}
