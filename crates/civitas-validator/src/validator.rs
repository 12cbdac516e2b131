//! Selection validation logic

use crate::{ConfigError, CoverageMode, Selection, SelectionWarning, ValidationConfig, ValidationError, Violation};
use civitas_domain::{ComponentCatalog, ComponentType};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Validates candidate selections against a catalog
///
/// The validator is the only producer of [`Selection`]. It checks, in order:
/// unknown types, size bounds, and category coverage, and reports every
/// violation it finds.
pub struct SelectionValidator<'a> {
    catalog: &'a ComponentCatalog,
    config: ValidationConfig,
}

impl<'a> SelectionValidator<'a> {
    /// Create a validator with the given configuration
    ///
    /// # Errors
    /// [`ConfigError`] if the configuration is inconsistent (see
    /// [`ValidationConfig::check`]).
    pub fn new(catalog: &'a ComponentCatalog, config: ValidationConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self { catalog, config })
    }

    /// Create a validator with the reference rules
    pub fn default_config(catalog: &'a ComponentCatalog) -> Self {
        Self {
            catalog,
            config: ValidationConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a list of component types
    ///
    /// Duplicates are removed before any other check and reported as
    /// warnings on the returned selection.
    ///
    /// # Errors
    /// [`ValidationError`] listing every violation found.
    pub fn validate(&self, raw: &[ComponentType]) -> Result<Selection, ValidationError> {
        self.check(raw.iter().copied(), BTreeSet::new())
    }

    /// Validate components given as text (e.g. `"RULE_OF_LAW"`)
    ///
    /// Unrecognised strings become
    /// [`Violation::UnknownComponentType`] entries; they are never ignored.
    ///
    /// # Errors
    /// [`ValidationError`] listing every violation found.
    pub fn validate_names<S: AsRef<str>>(&self, raw: &[S]) -> Result<Selection, ValidationError> {
        let mut parsed = Vec::with_capacity(raw.len());
        let mut unknown = BTreeSet::new();

        for name in raw {
            let name = name.as_ref();
            match ComponentType::parse(name) {
                Some(component) => parsed.push(component),
                None => {
                    unknown.insert(name.trim().to_string());
                }
            }
        }

        self.check(parsed.into_iter(), unknown)
    }

    fn check<I>(&self, components: I, mut unknown: BTreeSet<String>) -> Result<Selection, ValidationError>
    where
        I: Iterator<Item = ComponentType>,
    {
        let mut warnings = Vec::new();

        // 1. Dedupe
        let mut occurrences: BTreeMap<ComponentType, usize> = BTreeMap::new();
        for component in components {
            *occurrences.entry(component).or_insert(0) += 1;
        }
        for (component, count) in &occurrences {
            if *count > 1 {
                warnings.push(SelectionWarning::DuplicateRemoved {
                    component: *component,
                    occurrences: *count,
                });
            }
        }

        // 2. Catalog membership
        let mut selected = BTreeSet::new();
        for component in occurrences.into_keys() {
            if self.catalog.contains(component) {
                selected.insert(component);
            } else {
                unknown.insert(component.as_str().to_string());
            }
        }

        let mut violations: Vec<Violation> = unknown
            .into_iter()
            .map(|name| Violation::UnknownComponentType { name })
            .collect();

        // 3. Size bounds
        if selected.len() < self.config.min_size {
            violations.push(Violation::BelowMinimumSize {
                actual: selected.len(),
                minimum: self.config.min_size,
            });
        }
        if selected.len() > self.config.max_size {
            violations.push(Violation::AboveMaximumSize {
                actual: selected.len(),
                maximum: self.config.max_size,
            });
        }

        // 4. Category coverage
        for category in &self.config.required_categories {
            if selected.iter().any(|c| c.category() == *category) {
                continue;
            }
            match self.config.coverage {
                CoverageMode::Strict => {
                    violations.push(Violation::MissingRequiredCategory { category: *category });
                }
                CoverageMode::Lenient => {
                    warn!("Selection has no {} component", category);
                    warnings.push(SelectionWarning::MissingCategory { category: *category });
                }
            }
        }

        if !violations.is_empty() {
            debug!(
                violations = violations.len(),
                catalog = self.catalog.version(),
                "Selection rejected"
            );
            return Err(ValidationError { violations });
        }

        debug!(
            components = selected.len(),
            warnings = warnings.len(),
            "Selection accepted"
        );
        Ok(Selection::new(selected, warnings, self.catalog.version().to_string()))
    }
}
