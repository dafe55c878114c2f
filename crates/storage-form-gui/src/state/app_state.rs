//! Root application state.

use std::time::{Duration, Instant};

use storage_form_core::{
    DebouncedInput, FieldId, FormError, FormState, FormValues, SubmissionSnapshot,
};

use super::settings::Settings;

/// All state of the running application.
///
/// Keystrokes land in `drafts` immediately so the inputs echo what was typed,
/// and reach `form` only after the debouncer releases them. Methods take the
/// current instant from the caller so handlers stay thin and tests stay
/// deterministic.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validated form values, errors and dirty state.
    pub form: FormState,

    /// Raw text currently shown in each input.
    pub drafts: FormValues,

    /// Keystrokes waiting for their quiet period.
    pub input: DebouncedInput<FieldId>,

    /// Values captured by the last successful submit.
    pub last_submitted: Option<SubmissionSnapshot>,

    /// User preferences loaded at startup.
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    /// Create the initial state from settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            form: FormState::new(),
            drafts: FormValues::default(),
            input: DebouncedInput::new(settings.input),
            last_submitted: None,
            settings,
        }
    }

    /// Record a keystroke. Returns how long to wait before polling.
    pub fn record_input(&mut self, field: FieldId, value: String, now: Instant) -> Duration {
        self.drafts.set(field, value.clone());
        let deadline = self.input.push(field, value, now);
        deadline.saturating_duration_since(now)
    }

    /// Apply every value whose quiet period has passed.
    ///
    /// Returns the number of fields updated.
    pub fn apply_due_inputs(&mut self, now: Instant) -> usize {
        let due = self.input.poll(now);
        let count = due.len();
        for (field, value) in due {
            tracing::debug!(field = %field, "Applying debounced input");
            self.form.set_field(field, value);
        }
        count
    }

    /// Submit the form.
    ///
    /// On success the snapshot replaces the previous one, the inputs are
    /// cleared and keystrokes still waiting for their quiet period are
    /// dropped so they cannot dirty the freshly reset form.
    pub fn submit(&mut self) -> Result<&SubmissionSnapshot, FormError> {
        let snapshot = match self.form.submit() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Submit rejected: {}", err);
                return Err(err);
            }
        };

        let record = if self.settings.logging.log_values {
            snapshot.to_display_string()
        } else {
            snapshot.to_redacted_string()
        };
        tracing::info!(submission = snapshot.sequence(), "Saved {}", record);

        self.input.cancel_all();
        self.drafts = FormValues::default();
        Ok(self.last_submitted.insert(snapshot))
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    /// The snapshot to display: only while the form is clean.
    pub fn visible_snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.last_submitted
            .as_ref()
            .filter(|_| !self.form.is_dirty())
    }

    /// Dirty flag as shown in the status line.
    pub fn dirty_label(&self) -> &'static str {
        if self.form.is_dirty() { "true" } else { "false" }
    }
}
