//! Command implementations.

pub mod compare;
pub mod components;
pub mod export;
pub mod relations;
pub mod score;
pub mod validate;

pub use self::compare::execute_compare;
pub use self::components::execute_components;
pub use self::export::execute_export;
pub use self::relations::execute_relations;
pub use self::score::execute_score;
pub use self::validate::execute_validate;

use crate::cli::RuleArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use civitas_catalog::CatalogBundle;
use civitas_domain::ComponentType;
use civitas_validator::{CoverageMode, Selection, SelectionValidator, ValidationConfig};

/// Everything a command needs: loaded tables, rules and output settings.
pub struct Context {
    /// Active catalog and relationship registry
    pub bundle: CatalogBundle,
    /// Selection rules from the config file
    pub validation: ValidationConfig,
    /// Output formatter
    pub formatter: Formatter,
}

impl Context {
    /// Selection rules after applying `--lenient` / `--preview`.
    pub fn rules(&self, overrides: RuleArgs) -> ValidationConfig {
        if overrides.preview {
            ValidationConfig::preview()
        } else if overrides.lenient {
            ValidationConfig {
                coverage: CoverageMode::Lenient,
                ..self.validation.clone()
            }
        } else {
            self.validation.clone()
        }
    }

    /// Validate raw component names, printing the violations on rejection.
    pub fn select(&self, names: &[String], overrides: RuleArgs) -> Result<Selection> {
        let validator = SelectionValidator::new(self.bundle.catalog(), self.rules(overrides))?;
        match validator.validate_names(names) {
            Ok(selection) => Ok(selection),
            Err(err) => {
                println!("{}", self.formatter.format_rejection(&err)?);
                Err(CliError::Rejected(err))
            }
        }
    }
}

/// Parse one component name for commands that take a single component.
pub fn parse_component(name: &str) -> Result<ComponentType> {
    ComponentType::parse(name)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown component type: {}", name)))
}
