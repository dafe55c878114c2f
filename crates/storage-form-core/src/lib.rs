//! Core logic for the SFTP storage form.
//!
//! This crate holds everything the form does that is not drawing pixels:
//!
//! - **Field catalog** (`field`) - the three inputs and their presentation text
//! - **Validation rules** (`rules`) - pure per-field predicates, first violation wins
//! - **Form state** (`form`) - values, errors, dirty tracking and aggregate validity
//! - **Debouncing** (`debounce`) - schedule-and-replace propagation of raw input
//! - **Snapshots** (`snapshot`) - the last successfully submitted values
//!
//! # Example
//!
//! ```
//! use storage_form_core::{FieldId, FormState};
//!
//! let mut form = FormState::new();
//! form.set_field(FieldId::FirstName, "Ada");
//! form.set_field(FieldId::LastName, "Byron");
//! form.set_field(FieldId::HostAddress, "google.com");
//! assert!(form.is_valid());
//!
//! let snapshot = form.submit().unwrap();
//! assert!(!form.is_dirty());
//! assert_eq!(
//!     snapshot.to_display_string(),
//!     r#"{"firstName":"Ada","lastName":"Byron","hostAddress":"google.com"}"#
//! );
//! ```
//!
//! The crate never touches a clock on its own: the debouncer takes the current
//! [`std::time::Instant`] from the caller, which keeps every state transition
//! reproducible in tests.

mod debounce;
mod error;
mod field;
mod form;
mod rules;
mod snapshot;

pub use debounce::{DEFAULT_QUIET_PERIOD_MS, DebounceConfig, DebouncedInput};
pub use error::{FormError, Result};
pub use field::FieldId;
pub use form::{DirtyTracker, FormState, FormValues};
pub use rules::{
    DOMAIN_PATTERN_RULE, MAX_LENGTH_RULE, MIN_LENGTH_RULE, REQUIRED_RULE, RuleSet,
    ValidationRule, is_domain_like,
};
pub use snapshot::SubmissionSnapshot;
