//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation rules in the config are inconsistent
    #[error("Invalid validation rules: {0}")]
    Rules(#[from] civitas_validator::ConfigError),

    /// Catalog could not be loaded or written
    #[error(transparent)]
    Catalog(#[from] civitas_catalog::LoaderError),

    /// The selection was rejected; the violations were already printed
    #[error("Selection rejected with {} violation(s)", .0.violations.len())]
    Rejected(civitas_validator::ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitas_domain::ComponentCatalog;
    use civitas_validator::SelectionValidator;
    use std::error::Error as _;

    #[test]
    fn test_rejection_message_does_not_repeat_violations() {
        let catalog = ComponentCatalog::reference();
        let err = SelectionValidator::default_config(&catalog)
            .validate_names(&["DEMOCRATIC_PROCESS", "PHILOSOPHER_KING"])
            .unwrap_err();
        let count = err.violations.len();

        let cli_err = CliError::Rejected(err);
        assert_eq!(
            cli_err.to_string(),
            format!("Selection rejected with {} violation(s)", count)
        );
        assert!(cli_err.source().is_none());

        // anyhow's alternate form walks the source chain; it must stay one line
        let rendered = format!("{:#}", anyhow::Error::from(cli_err));
        assert!(!rendered.contains("PHILOSOPHER_KING"));
    }
}
