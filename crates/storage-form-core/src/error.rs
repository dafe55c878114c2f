//! Form error types.
//!
//! Field problems are not errors: they are validation messages stored on the
//! form. These variants cover misuse of the form API itself.

use thiserror::Error;

use crate::field::FieldId;

/// Form operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Submit was requested while at least one field fails its rules.
    #[error("Cannot submit: {} field(s) are invalid", fields.len())]
    Invalid {
        /// Fields that currently fail validation, in display order.
        fields: Vec<FieldId>,
    },

    /// A field key did not name any known field.
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl FormError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid { fields } => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                format!("Please fix the following fields: {}", labels.join(", "))
            }
            Self::UnknownField(key) => format!("'{}' is not a field of this form", key),
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
