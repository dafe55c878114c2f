//! The fields of the storage form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Identifies one input of the form.
///
/// Variants are declared in display order; `Ord` follows that order so that
/// maps keyed by `FieldId` iterate the way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    HostAddress,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 3] = [Self::FirstName, Self::LastName, Self::HostAddress];

    /// Serialized key, as used in the submitted record.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::HostAddress => "hostAddress",
        }
    }

    /// Human-readable label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::HostAddress => "Your SFTP Storage",
        }
    }

    /// Placeholder text shown while the input is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::HostAddress => "google.com",
        }
    }

    /// Literal shown in front of the input. Never part of the stored value.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::HostAddress => Some("sftp://"),
            _ => None,
        }
    }

    /// Whether the value may contain personal data.
    ///
    /// Used to redact values in log output.
    pub fn is_personal(&self) -> bool {
        matches!(self, Self::FirstName | Self::LastName)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
