//! Individual validation rules.

use std::sync::LazyLock;

use regex::Regex;

/// Domain shape: dot-separated labels of ASCII word characters, ending in a
/// 2-6 letter top-level label.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*\.[A-Za-z]{2,6}$")
        .expect("Invalid domain regex")
});

/// Value must not be empty.
pub const REQUIRED_RULE: ValidationRule = ValidationRule {
    kind: RuleKind::Required,
    message: "This field is required!",
};

/// Value must be at least three characters long.
pub const MIN_LENGTH_RULE: ValidationRule = ValidationRule {
    kind: RuleKind::MinLength(3),
    message: "Minimum 3 letters",
};

/// Value must be at most six characters long.
pub const MAX_LENGTH_RULE: ValidationRule = ValidationRule {
    kind: RuleKind::MaxLength(6),
    message: "Maximum 6 letters",
};

/// Value must look like a domain name.
pub const DOMAIN_PATTERN_RULE: ValidationRule = ValidationRule {
    kind: RuleKind::DomainPattern,
    message: "this is not a domain",
};

/// What a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleKind {
    /// Non-empty value.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// Matches the domain-name shape.
    DomainPattern,
}

/// A named predicate over a field value with a fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    kind: RuleKind,
    message: &'static str,
}

impl ValidationRule {
    /// Message shown when the rule is violated.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Short identifier, used in log output.
    pub fn name(&self) -> &'static str {
        match self.kind {
            RuleKind::Required => "required",
            RuleKind::MinLength(_) => "minLength",
            RuleKind::MaxLength(_) => "maxLength",
            RuleKind::DomainPattern => "pattern",
        }
    }

    /// Check a value against this rule.
    ///
    /// Lengths are counted in characters, not bytes. Length and pattern rules
    /// accept the empty string; emptiness is the concern of `Required`.
    pub fn passes(&self, value: &str) -> bool {
        match self.kind {
            RuleKind::Required => !value.is_empty(),
            RuleKind::MinLength(min) => value.is_empty() || value.chars().count() >= min,
            RuleKind::MaxLength(max) => value.chars().count() <= max,
            RuleKind::DomainPattern => value.is_empty() || is_domain_like(value),
        }
    }

    /// Check a value, returning the failure message on violation.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        (!self.passes(value)).then_some(self.message)
    }
}

/// Check if a value has the shape of a domain name.
pub fn is_domain_like(value: &str) -> bool {
    DOMAIN_REGEX.is_match(value)
}
