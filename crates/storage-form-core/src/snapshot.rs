//! Submission snapshots.

use serde::Serialize;

use crate::field::FieldId;
use crate::form::FormValues;

/// Placeholder used for personal values in redacted output.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Immutable copy of the form values taken at a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionSnapshot {
    #[serde(skip)]
    sequence: u64,
    #[serde(flatten)]
    values: FormValues,
}

impl SubmissionSnapshot {
    /// Create a snapshot of the given values.
    pub fn new(sequence: u64, values: FormValues) -> Self {
        Self { sequence, values }
    }

    /// Position of this submit, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The submitted values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Render the values as a compact JSON record.
    pub fn to_display_string(&self) -> String {
        serde_json::to_string(&self.values).unwrap_or_default()
    }

    /// Render the values as JSON with personal fields replaced.
    pub fn to_redacted_string(&self) -> String {
        let mut redacted = self.values.clone();
        for field in FieldId::ALL {
            if field.is_personal() && !redacted.get(field).is_empty() {
                redacted.set(field, REDACTED_VALUE);
            }
        }
        serde_json::to_string(&redacted).unwrap_or_default()
    }
}
