//! Tests for the form message handler.

use std::time::{Duration, Instant};

use storage_form_core::FieldId;
use storage_form_gui::handler::{FormHandler, MessageHandler};
use storage_form_gui::message::FormMessage;
use storage_form_gui::state::AppState;

fn send(state: &mut AppState, msg: FormMessage) {
    // Follow-up tasks are timers; tests advance time through AppState
    let _task = FormHandler.handle(state, msg);
}

fn fill_valid(state: &mut AppState) {
    let now = Instant::now();
    state.record_input(FieldId::FirstName, "Ada".to_string(), now);
    state.record_input(FieldId::LastName, "Byron".to_string(), now);
    state.record_input(FieldId::HostAddress, "google.com".to_string(), now);
    state.apply_due_inputs(now + Duration::from_millis(500));
}

#[test]
fn test_input_changed_updates_draft_and_waits() {
    let mut state = AppState::default();
    send(
        &mut state,
        FormMessage::InputChanged(FieldId::HostAddress, "goo".to_string()),
    );

    assert_eq!(state.drafts.get(FieldId::HostAddress), "goo");
    assert_eq!(state.input.pending_value(FieldId::HostAddress), Some("goo"));
    assert_eq!(state.form.value(FieldId::HostAddress), "");
    assert!(!state.form.is_dirty());
}

#[test]
fn test_early_quiet_period_applies_nothing() {
    let mut state = AppState::default();
    send(
        &mut state,
        FormMessage::InputChanged(FieldId::FirstName, "Ada".to_string()),
    );
    send(&mut state, FormMessage::QuietPeriodElapsed);

    assert!(state.input.is_pending(FieldId::FirstName));
    assert_eq!(state.form.value(FieldId::FirstName), "");
    assert!(!state.form.is_dirty());
}

#[test]
fn test_submit_ignored_while_invalid() {
    let mut state = AppState::default();
    let now = Instant::now();
    state.record_input(FieldId::FirstName, "Al".to_string(), now);
    state.apply_due_inputs(now + Duration::from_millis(500));

    send(&mut state, FormMessage::Submit);

    assert!(state.last_submitted.is_none());
    assert_eq!(state.form.value(FieldId::FirstName), "Al");
    assert!(state.form.is_dirty());
}

#[test]
fn test_submit_saves_valid_form() {
    let mut state = AppState::default();
    fill_valid(&mut state);

    send(&mut state, FormMessage::Submit);

    let snapshot = state.visible_snapshot().map(|s| s.to_display_string());
    assert_eq!(
        snapshot.as_deref(),
        Some(r#"{"firstName":"Ada","lastName":"Byron","hostAddress":"google.com"}"#)
    );
    assert!(!state.form.is_dirty());
    assert!(state.drafts.is_empty());
}
