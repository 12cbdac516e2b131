//! Civitas Effectiveness Engine
//!
//! Scores validated selections of governance components.
//!
//! The score is the mean base effectiveness of the selected components, plus
//! the magnitude of every additive rule between selected pairs, minus the
//! magnitude of every conflicting rule, clamped to [0, 100]. The unclamped
//! value is kept as `raw_total` for ranking builds that exceed the cap.
//!
//! # Examples
//!
//! ```
//! use civitas_domain::{ComponentCatalog, RelationshipRegistry};
//! use civitas_engine::EffectivenessCalculator;
//! use civitas_validator::SelectionValidator;
//!
//! let catalog = ComponentCatalog::reference();
//! let registry = RelationshipRegistry::reference(&catalog).unwrap();
//!
//! let selection = SelectionValidator::default_config(&catalog)
//!     .validate_names(&["DEMOCRATIC_PROCESS", "ELECTORAL_LEGITIMACY", "RULE_OF_LAW"])
//!     .unwrap();
//!
//! let result = EffectivenessCalculator::new(&catalog, &registry).calculate(&selection);
//! assert_eq!(result.synergy_count, 3);
//! assert_eq!(result.total_effectiveness, 100.0);
//! ```

#![warn(missing_docs)]

mod calculator;
mod profile;
mod result;

pub use calculator::{EffectivenessCalculator, MAX_EFFECTIVENESS, MIN_EFFECTIVENESS};
pub use profile::SelectionProfile;
pub use result::{EffectivenessResult, RankedResult};
