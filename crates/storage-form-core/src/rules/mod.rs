//! Validation rules.
//!
//! Provides:
//! - `ValidationRule` - a named predicate with a fixed failure message
//! - `RuleSet` - the rules attached to each field, evaluated in order

mod registry;
mod rule;

pub use registry::RuleSet;
pub use rule::{
    DOMAIN_PATTERN_RULE, MAX_LENGTH_RULE, MIN_LENGTH_RULE, REQUIRED_RULE,
    ValidationRule, is_domain_like,
};
