//! Field values.

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// The current value of every field.
///
/// Serializes with the same keys the form uses for its fields, in display
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub host_address: String,
}

impl FormValues {
    /// Value of a field.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::HostAddress => &self.host_address,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::HostAddress => &mut self.host_address,
        };
        *slot = value.into();
    }

    /// Iterate over `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}
