// String Constraint Rules
// Checks values against declared constraints and reports every violation

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// One named validation failure, as surfaced in 422 responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Which field failed
    pub field: String,
    /// Human-readable description of the failure
    pub message: String,
    /// Which constraint was violated (e.g. `min_length`, `json`)
    pub context: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>, context: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
            context: context.to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

pub type RulesResult = Result<(), Vec<FieldError>>;

// ============================================================================
// STRING RULES
// ============================================================================

/// Declarative constraints for a string value.
///
/// `check` reports all violations, not just the first one found.
#[derive(Debug, Default)]
pub struct StringRules {
    /// Minimum length in characters
    pub min_length: Option<usize>,
    /// Maximum length in characters
    pub max_length: Option<usize>,
    /// Full regex the value must match
    pub pattern: Option<Regex>,
}

impl StringRules {
    pub fn check(&self, field: &str, value: &str) -> RulesResult {
        let mut errors = Vec::new();
        // Lengths are counted in characters, not bytes
        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                errors.push(FieldError::new(
                    field,
                    format!("must be at least {} characters, got {}", min, length),
                    "min_length",
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                errors.push(FieldError::new(
                    field,
                    format!("must be at most {} characters, got {}", max, length),
                    "max_length",
                ));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                errors.push(FieldError::new(
                    field,
                    format!("must match pattern \"{}\"", pattern.as_str()),
                    "pattern",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
