//! Draft validation - schema-driven checks before create/update.
//!
//! A `DraftSchema` is assembled by the caller from its configuration:
//! required free-text fields and closed enumerations whose permitted sets
//! are injected, never hard-coded here. Validation is pure, never touches
//! a store, and reports every violation so the interface can mark each
//! offending field.
//!
//! ## Example
//!
//! ```ignore
//! use collected_rust::DraftSchema;
//!
//! let schema = DraftSchema::new()
//!     .required("name")
//!     .required("owner")
//!     .one_of("status", ["active", "inactive", "draft", "archived"]);
//!
//! let errors = schema.validate(&draft);
//! if errors.is_empty() {
//!     // safe to submit
//! }
//! ```

use std::fmt;

use crate::record::Draft;

/// Why a draft field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// Required field is empty after trimming whitespace.
    Required,
    /// Enumerated field holds a value outside the permitted set.
    NotInSet { allowed: Vec<String> },
}

/// A single per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ValidationReason::Required => write!(f, "field {} is required", self.field),
            ValidationReason::NotInSet { allowed } => write!(
                f,
                "field {} must be one of [{}]",
                self.field,
                allowed.join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

enum Rule {
    Required { field: String },
    OneOf { field: String, allowed: Vec<String> },
}

/// Validation rules for one draft shape.
///
/// Rule methods use the builder pattern, returning `self` for chaining.
#[derive(Default)]
pub struct DraftSchema {
    rules: Vec<Rule>,
}

impl DraftSchema {
    /// Create an empty schema (every draft passes).
    pub fn new() -> Self {
        DraftSchema::default()
    }

    /// Require `field` to be non-empty after trimming.
    pub fn required(mut self, field: impl Into<String>) -> Self {
        self.rules.push(Rule::Required {
            field: field.into(),
        });
        self
    }

    /// Require `field` to hold one of `allowed` exactly.
    pub fn one_of<I, S>(mut self, field: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(Rule::OneOf {
            field: field.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Check a draft against every rule, reporting all violations.
    pub fn validate<D: Draft>(&self, draft: &D) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for rule in &self.rules {
            match rule {
                Rule::Required { field } => {
                    let empty = draft
                        .field(field)
                        .map(|value| value.trim().is_empty())
                        .unwrap_or(true);
                    if empty {
                        errors.push(ValidationError {
                            field: field.clone(),
                            reason: ValidationReason::Required,
                        });
                    }
                }
                Rule::OneOf { field, allowed } => {
                    let valid = draft
                        .field(field)
                        .map(|value| allowed.iter().any(|a| a == value))
                        .unwrap_or(false);
                    if !valid {
                        errors.push(ValidationError {
                            field: field.clone(),
                            reason: ValidationReason::NotInSet {
                                allowed: allowed.clone(),
                            },
                        });
                    }
                }
            }
        }

        errors
    }
}
