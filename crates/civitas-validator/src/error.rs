//! Validation error types

use civitas_domain::Category;
use serde::Serialize;
use thiserror::Error;

/// One structural rule a candidate selection breaks
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// Fewer distinct components than the configured minimum
    #[error("Selection has {actual} components, minimum is {minimum}")]
    BelowMinimumSize {
        /// Distinct recognised components
        actual: usize,
        /// Configured minimum
        minimum: usize,
    },

    /// More distinct components than the configured maximum
    #[error("Selection has {actual} components, maximum is {maximum}")]
    AboveMaximumSize {
        /// Distinct recognised components
        actual: usize,
        /// Configured maximum
        maximum: usize,
    },

    /// A required category has no component in the selection
    #[error("Selection needs at least one {category} component")]
    MissingRequiredCategory {
        /// The uncovered category
        category: Category,
    },

    /// Unrecognised name, or a component the catalog does not define
    #[error("Unknown component type: {name}")]
    UnknownComponentType {
        /// The text or identifier as supplied
        name: String,
    },
}

/// A selection was rejected
///
/// Carries every violation found in one pass, not only the first, so the
/// caller can show the complete list.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Selection rejected with {} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct ValidationError {
    /// All violations, in check order
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Iterate over the violations
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Whether any violation is an unknown component type
    pub fn has_unknown_types(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v, Violation::UnknownComponentType { .. }))
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_violation() {
        let err = ValidationError {
            violations: vec![
                Violation::BelowMinimumSize { actual: 2, minimum: 3 },
                Violation::UnknownComponentType { name: "PHILOSOPHER_KING".to_string() },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 violation(s)"));
        assert!(msg.contains("minimum is 3"));
        assert!(msg.contains("PHILOSOPHER_KING"));
        assert!(err.has_unknown_types());
    }

    #[test]
    fn test_violation_serializes_with_rule_tag() {
        let json = serde_json::to_value(Violation::MissingRequiredCategory {
            category: Category::Institution,
        })
        .unwrap();
        assert_eq!(json["rule"], "missing_required_category");
        assert_eq!(json["category"], "institution");
    }
}
