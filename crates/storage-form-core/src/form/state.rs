//! The form state holder.

use std::collections::BTreeMap;

use crate::error::{FormError, Result};
use crate::field::FieldId;
use crate::rules::RuleSet;
use crate::snapshot::SubmissionSnapshot;

use super::dirty::DirtyTracker;
use super::values::FormValues;

/// Values, validation errors and dirty state of the form.
///
/// Every mutation goes through [`FormState::set_field`], which re-evaluates
/// the changed field and recomputes aggregate validity, so the derived state
/// can never drift from the values.
///
/// Errors are only shown for fields that were edited: a freshly created or
/// reset form carries no messages, but is still invalid because its required
/// fields are empty.
#[derive(Debug, Clone)]
pub struct FormState {
    rules: RuleSet,
    values: FormValues,
    errors: BTreeMap<FieldId, &'static str>,
    dirty: DirtyTracker,
    valid: bool,
    submissions: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Create an empty, clean form.
    pub fn new() -> Self {
        let rules = RuleSet::standard();
        let values = FormValues::default();
        let valid = rules.all_pass(&values);
        Self {
            rules,
            values,
            errors: BTreeMap::new(),
            dirty: DirtyTracker::new(),
            valid,
            submissions: 0,
        }
    }

    /// Update a field, validate it and recompute aggregate validity.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();

        match self.rules.first_violation(field, &value) {
            Some(rule) => {
                tracing::debug!(field = %field, rule = rule.name(), "Field failed validation");
                self.errors.insert(field, rule.message());
            }
            None => {
                self.errors.remove(&field);
            }
        }

        self.values.set(field, value);
        self.dirty.mark_dirty();
        self.valid = self.rules.all_pass(&self.values);
    }

    /// Capture the current values and reset the form.
    ///
    /// Fails without touching the state when any field is invalid.
    pub fn submit(&mut self) -> Result<SubmissionSnapshot> {
        if !self.valid {
            let fields = self
                .rules
                .check_all(&self.values)
                .into_iter()
                .map(|(field, _)| field)
                .collect();
            return Err(FormError::Invalid { fields });
        }

        self.submissions += 1;
        let snapshot = SubmissionSnapshot::new(self.submissions, self.values.clone());
        tracing::info!(
            submission = self.submissions,
            edits = self.dirty.edits(),
            "Form submitted"
        );

        self.reset();
        Ok(snapshot)
    }

    /// Return to the initial empty, clean state.
    ///
    /// The submission counter is kept.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.dirty.mark_clean();
        self.valid = self.rules.all_pass(&self.values);
    }

    /// Current value of a field.
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    /// All current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Validation message for a field, if it was edited and is invalid.
    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Check if any field is showing an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if every field passes its rules.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Check if the form was edited since it was last clean.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Dirty tracking details.
    pub fn dirty_tracker(&self) -> &DirtyTracker {
        &self.dirty
    }

    /// Number of successful submits so far.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field(FieldId::FirstName, "Ada");
        form.set_field(FieldId::LastName, "Byron");
        form.set_field(FieldId::HostAddress, "google.com");
        form
    }

    #[test]
    fn test_new_form_is_clean_invalid_and_silent() {
        let form = FormState::new();
        assert!(!form.is_dirty());
        assert!(!form.is_valid());
        assert!(!form.has_errors());
        for field in FieldId::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn test_set_field_marks_dirty_and_validates() {
        let mut form = FormState::new();
        form.set_field(FieldId::FirstName, "Al");
        assert!(form.is_dirty());
        assert_eq!(form.error(FieldId::FirstName), Some("Minimum 3 letters"));
        assert_eq!(form.error(FieldId::LastName), None);

        form.set_field(FieldId::FirstName, "Ala");
        assert_eq!(form.error(FieldId::FirstName), None);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_valid_only_when_all_fields_pass() {
        let mut form = filled();
        assert!(form.is_valid());

        form.set_field(FieldId::LastName, "Lovelace");
        assert!(!form.is_valid());
        assert_eq!(form.error(FieldId::LastName), Some("Maximum 6 letters"));
    }

    #[test]
    fn test_submit_resets_and_returns_snapshot() {
        let mut form = filled();
        let snapshot = form.submit().unwrap();

        assert_eq!(snapshot.sequence(), 1);
        assert_eq!(snapshot.values().first_name, "Ada");
        assert!(!form.is_dirty());
        assert!(!form.is_valid());
        assert!(form.values().is_empty());
        assert_eq!(form.submissions(), 1);
    }

    #[test]
    fn test_submit_rejected_when_invalid() {
        let mut form = FormState::new();
        form.set_field(FieldId::FirstName, "Ada");

        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            FormError::Invalid {
                fields: vec![FieldId::LastName, FieldId::HostAddress],
            }
        );
        // State untouched
        assert!(form.is_dirty());
        assert_eq!(form.value(FieldId::FirstName), "Ada");
        assert_eq!(form.submissions(), 0);
    }

    #[test]
    fn test_reset_clears_errors() {
        let mut form = FormState::new();
        form.set_field(FieldId::HostAddress, "nope");
        assert!(form.has_errors());

        form.reset();
        assert!(!form.has_errors());
        assert!(!form.is_dirty());
    }
}
