//! End-to-end behavior of the form: debounced keystrokes, validation,
//! dirty tracking and submission snapshots.

use std::time::{Duration, Instant};

use storage_form_core::{
    DebounceConfig, DebouncedInput, FieldId, FormError, FormState, SubmissionSnapshot,
};

/// Form plus debouncer, driven by an explicit clock.
struct Harness {
    form: FormState,
    input: DebouncedInput<FieldId>,
    start: Instant,
    applied: Vec<(FieldId, String)>,
    last_submitted: Option<SubmissionSnapshot>,
}

impl Harness {
    fn new() -> Self {
        Self {
            form: FormState::new(),
            input: DebouncedInput::new(DebounceConfig::default()),
            start: Instant::now(),
            applied: Vec::new(),
            last_submitted: None,
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.start + Duration::from_millis(ms)
    }

    fn type_at(&mut self, ms: u64, field: FieldId, value: &str) {
        let now = self.at(ms);
        self.input.push(field, value, now);
    }

    fn tick_at(&mut self, ms: u64) {
        let now = self.at(ms);
        for (field, value) in self.input.poll(now) {
            self.applied.push((field, value.clone()));
            self.form.set_field(field, value);
        }
    }

    fn submit(&mut self) -> Result<(), FormError> {
        let snapshot = self.form.submit()?;
        self.last_submitted = Some(snapshot);
        Ok(())
    }

    /// What the snapshot region would display.
    fn displayed_snapshot(&self) -> Option<String> {
        self.last_submitted
            .as_ref()
            .filter(|_| !self.form.is_dirty())
            .map(SubmissionSnapshot::to_display_string)
    }

    fn fill_valid(&mut self, at: u64) {
        self.type_at(at, FieldId::FirstName, "Ada");
        self.type_at(at, FieldId::LastName, "Byron");
        self.type_at(at, FieldId::HostAddress, "google.com");
        self.tick_at(at + 500);
    }
}

#[test]
fn test_empty_value_gives_required_error_for_every_field() {
    let mut h = Harness::new();
    for field in FieldId::ALL {
        h.type_at(0, field, "x");
    }
    h.tick_at(500);
    for field in FieldId::ALL {
        h.type_at(600, field, "");
    }
    h.tick_at(1100);

    for field in FieldId::ALL {
        assert_eq!(h.form.error(field), Some("This field is required!"));
    }
}

#[test]
fn test_rapid_keystrokes_apply_only_final_value_once() {
    let mut h = Harness::new();
    h.type_at(0, FieldId::HostAddress, "g");
    h.type_at(40, FieldId::HostAddress, "go");
    h.type_at(100, FieldId::HostAddress, "google.com");

    // 500 after the first keystroke, but only 400 after the last
    h.tick_at(500);
    assert!(h.applied.is_empty());
    assert!(!h.form.is_dirty());

    h.tick_at(600);
    assert_eq!(
        h.applied,
        vec![(FieldId::HostAddress, "google.com".to_string())]
    );

    h.tick_at(2000);
    assert_eq!(h.applied.len(), 1);
    assert_eq!(h.form.value(FieldId::HostAddress), "google.com");
}

#[test]
fn test_fields_debounce_independently() {
    let mut h = Harness::new();
    h.type_at(0, FieldId::FirstName, "Ada");
    h.type_at(300, FieldId::LastName, "Byron");

    h.tick_at(500);
    assert_eq!(h.applied, vec![(FieldId::FirstName, "Ada".to_string())]);

    h.tick_at(800);
    assert_eq!(h.applied.len(), 2);
    assert_eq!(h.applied[1], (FieldId::LastName, "Byron".to_string()));
}

#[test]
fn test_submit_enabled_iff_all_fields_valid() {
    let mut h = Harness::new();
    assert!(!h.form.is_valid());

    h.type_at(0, FieldId::FirstName, "Ada");
    h.type_at(0, FieldId::LastName, "Byron");
    h.tick_at(500);
    assert!(!h.form.is_valid());

    h.type_at(600, FieldId::HostAddress, "not a domain");
    h.tick_at(1100);
    assert!(!h.form.is_valid());
    assert_eq!(
        h.form.error(FieldId::HostAddress),
        Some("this is not a domain")
    );

    h.type_at(1200, FieldId::HostAddress, "google.com");
    h.tick_at(1700);
    assert!(h.form.is_valid());
}

#[test]
fn test_snapshot_visible_only_while_clean() {
    let mut h = Harness::new();
    assert_eq!(h.displayed_snapshot(), None);

    h.fill_valid(0);
    assert!(h.form.is_dirty());
    h.submit().unwrap();

    assert!(!h.form.is_dirty());
    assert_eq!(
        h.displayed_snapshot().as_deref(),
        Some(r#"{"firstName":"Ada","lastName":"Byron","hostAddress":"google.com"}"#)
    );

    // Any edit hides it until the next valid submit
    h.type_at(1000, FieldId::LastName, "Lovelace");
    h.tick_at(1500);
    assert!(h.form.is_dirty());
    assert_eq!(h.displayed_snapshot(), None);
    assert!(h.submit().is_err());
    assert_eq!(h.displayed_snapshot(), None);
}

#[test]
fn test_second_submit_overwrites_snapshot() {
    let mut h = Harness::new();
    h.fill_valid(0);
    h.submit().unwrap();

    h.type_at(1000, FieldId::FirstName, "Grace");
    h.type_at(1000, FieldId::LastName, "Hopper");
    h.type_at(1000, FieldId::HostAddress, "navy.mil");
    h.tick_at(1500);
    h.submit().unwrap();

    let snapshot = h.last_submitted.as_ref().unwrap();
    assert_eq!(snapshot.sequence(), 2);
    assert_eq!(
        h.displayed_snapshot().as_deref(),
        Some(r#"{"firstName":"Grace","lastName":"Hopper","hostAddress":"navy.mil"}"#)
    );
}
