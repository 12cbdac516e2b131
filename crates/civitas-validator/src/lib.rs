//! Civitas Selection Validator
//!
//! Checks candidate component selections before they are scored.
//!
//! The validator provides:
//! - Duplicate removal (reported as warnings)
//! - Size bounds (reference: 3 to 24 components)
//! - Category coverage (strict: violations, lenient: warnings)
//! - Unknown type detection, for both text input and catalog gaps
//!
//! # Examples
//!
//! ```
//! use civitas_domain::ComponentCatalog;
//! use civitas_validator::{SelectionValidator, ValidationConfig};
//!
//! let catalog = ComponentCatalog::reference();
//! let validator = SelectionValidator::new(&catalog, ValidationConfig::default()).unwrap();
//!
//! let selection = validator
//!     .validate_names(&["DEMOCRATIC_PROCESS", "ELECTORAL_LEGITIMACY", "RULE_OF_LAW"])
//!     .unwrap();
//! assert_eq!(selection.len(), 3);
//!
//! let err = validator.validate_names(&["DEMOCRATIC_PROCESS", "RULE_OF_LAW"]).unwrap_err();
//! assert_eq!(err.violations.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod selection;
mod validator;

pub use config::{ConfigError, CoverageMode, ValidationConfig, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
pub use error::{ValidationError, Violation};
pub use selection::{Selection, SelectionWarning};
pub use validator::SelectionValidator;
