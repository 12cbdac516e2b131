//! Validator configuration

use civitas_domain::{Category, COMPONENT_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference minimum selection size
pub const DEFAULT_MIN_SIZE: usize = 3;

/// Reference maximum selection size
pub const DEFAULT_MAX_SIZE: usize = 24;

/// How missing required categories are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageMode {
    /// Missing categories are violations
    Strict,

    /// Missing categories are reported as warnings only
    Lenient,
}

/// Inconsistent validator configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Minimum size exceeds maximum size
    #[error("min_size ({min}) is greater than max_size ({max})")]
    InvertedBounds {
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },

    /// A category is listed more than once
    #[error("required category listed twice: {0}")]
    DuplicateCategory(Category),
}

/// Configuration for selection validation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Smallest accepted selection (after dedupe)
    #[serde(default = "default_min_size")]
    pub min_size: usize,

    /// Largest accepted selection (after dedupe)
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Strict or lenient category coverage
    #[serde(default = "default_coverage")]
    pub coverage: CoverageMode,

    /// Categories that must each contribute at least one component
    #[serde(default = "default_required_categories")]
    pub required_categories: Vec<Category>,
}

fn default_min_size() -> usize {
    DEFAULT_MIN_SIZE
}

fn default_max_size() -> usize {
    DEFAULT_MAX_SIZE
}

fn default_coverage() -> CoverageMode {
    CoverageMode::Strict
}

fn default_required_categories() -> Vec<Category> {
    vec![Category::DecisionProcess, Category::Institution]
}

impl Default for ValidationConfig {
    /// Reference rules: 3..=24 components, strict coverage of
    /// Decision Process and Institution
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            coverage: CoverageMode::Strict,
            required_categories: default_required_categories(),
        }
    }
}

impl ValidationConfig {
    /// Same bounds as the default, but coverage gaps only warn
    pub fn lenient() -> Self {
        Self {
            coverage: CoverageMode::Lenient,
            ..Self::default()
        }
    }

    /// Relaxed rules for quick previews while a selection is being built
    ///
    /// Any non-empty selection up to the full catalog is accepted.
    pub fn preview() -> Self {
        Self {
            min_size: 1,
            max_size: COMPONENT_COUNT,
            coverage: CoverageMode::Lenient,
            required_categories: Vec::new(),
        }
    }

    /// Whether coverage gaps are violations
    pub fn is_strict(&self) -> bool {
        self.coverage == CoverageMode::Strict
    }

    /// Check the configuration for internal consistency
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min_size > self.max_size {
            return Err(ConfigError::InvertedBounds {
                min: self.min_size,
                max: self.max_size,
            });
        }

        for (idx, category) in self.required_categories.iter().enumerate() {
            if self.required_categories[..idx].contains(category) {
                return Err(ConfigError::DuplicateCategory(*category));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.min_size, 3);
        assert_eq!(config.max_size, 24);
        assert!(config.is_strict());
        assert_eq!(
            config.required_categories,
            vec![Category::DecisionProcess, Category::Institution]
        );
    }

    #[test]
    fn test_lenient_config() {
        let config = ValidationConfig::lenient();
        assert!(!config.is_strict());
        assert_eq!(config.min_size, ValidationConfig::default().min_size);
    }

    #[test]
    fn test_preview_config() {
        let config = ValidationConfig::preview();
        assert_eq!(config.min_size, 1);
        assert_eq!(config.max_size, 106);
        assert!(config.required_categories.is_empty());
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_check_rejects_inverted_bounds() {
        let config = ValidationConfig {
            min_size: 10,
            max_size: 5,
            ..ValidationConfig::default()
        };
        assert_eq!(config.check(), Err(ConfigError::InvertedBounds { min: 10, max: 5 }));
    }

    #[test]
    fn test_check_rejects_repeated_category() {
        let config = ValidationConfig {
            required_categories: vec![Category::Institution, Category::Institution],
            ..ValidationConfig::default()
        };
        assert_eq!(config.check(), Err(ConfigError::DuplicateCategory(Category::Institution)));
    }

    #[test]
    fn test_parse_toml_with_defaults() {
        let toml = r#"
            max_size = 12
            coverage = "lenient"
            required_categories = ["decision_process", "legitimacy_source"]
        "#;

        let config: ValidationConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.min_size, 3);
        assert_eq!(config.max_size, 12);
        assert_eq!(config.coverage, CoverageMode::Lenient);
        assert_eq!(
            config.required_categories,
            vec![Category::DecisionProcess, Category::LegitimacySource]
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ValidationConfig::preview();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: ValidationConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
