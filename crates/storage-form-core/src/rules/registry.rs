//! Per-field rule set.

use crate::field::FieldId;
use crate::form::FormValues;

use super::rule::{
    DOMAIN_PATTERN_RULE, MAX_LENGTH_RULE, MIN_LENGTH_RULE, REQUIRED_RULE, ValidationRule,
};

static FIRST_NAME_RULES: [ValidationRule; 2] = [REQUIRED_RULE, MIN_LENGTH_RULE];
static LAST_NAME_RULES: [ValidationRule; 2] = [REQUIRED_RULE, MAX_LENGTH_RULE];
static HOST_ADDRESS_RULES: [ValidationRule; 2] = [REQUIRED_RULE, DOMAIN_PATTERN_RULE];

/// The rules attached to each field of the form.
///
/// Rules are evaluated in declaration order and the first violation wins, so
/// a field never carries more than one message.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSet;

impl RuleSet {
    /// The rule set used by the storage form.
    pub fn standard() -> Self {
        Self
    }

    /// Rules for a field, in evaluation order.
    pub fn rules_for(&self, field: FieldId) -> &'static [ValidationRule] {
        match field {
            FieldId::FirstName => &FIRST_NAME_RULES,
            FieldId::LastName => &LAST_NAME_RULES,
            FieldId::HostAddress => &HOST_ADDRESS_RULES,
        }
    }

    /// Evaluate a value for a field, returning the first violated rule.
    pub fn first_violation(&self, field: FieldId, value: &str) -> Option<&'static ValidationRule> {
        self.rules_for(field)
            .iter()
            .find(|rule| !rule.passes(value))
    }

    /// Evaluate a value for a field, returning the failure message if any.
    pub fn evaluate(&self, field: FieldId, value: &str) -> Option<&'static str> {
        self.first_violation(field, value).map(ValidationRule::message)
    }

    /// Evaluate every field, returning the failures in display order.
    pub fn check_all(&self, values: &FormValues) -> Vec<(FieldId, &'static str)> {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| {
                self.evaluate(field, values.get(field))
                    .map(|message| (field, message))
            })
            .collect()
    }

    /// Check if every field passes its rules.
    pub fn all_pass(&self, values: &FormValues) -> bool {
        FieldId::ALL
            .into_iter()
            .all(|field| self.first_violation(field, values.get(field)).is_none())
    }
}
