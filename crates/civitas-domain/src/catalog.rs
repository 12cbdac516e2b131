//! Component catalog - read-only lookup of component definitions

use crate::error::{CatalogLoadError, UnknownComponentType};
use crate::{reference, Category, ComponentDefinition, ComponentType};
use std::collections::BTreeMap;

/// Static lookup of component definitions
///
/// Built once, never mutated. Catalogs are passed by reference to the
/// validator and calculator, so several versions can coexist in one process.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    version: String,
    definitions: BTreeMap<ComponentType, ComponentDefinition>,
}

impl ComponentCatalog {
    /// Build a catalog from definition rows, validating every row
    ///
    /// # Errors
    /// Returns the first [`CatalogLoadError`] found: duplicate rows, base
    /// effectiveness or capacity outside [0, 100], or a category that
    /// disagrees with the component type.
    pub fn from_definitions<I>(version: impl Into<String>, rows: I) -> Result<Self, CatalogLoadError>
    where
        I: IntoIterator<Item = ComponentDefinition>,
    {
        let version = version.into();
        let mut definitions = BTreeMap::new();

        for row in rows {
            validate_row(&row)?;
            if definitions.contains_key(&row.component) {
                return Err(CatalogLoadError::DuplicateComponent(row.component));
            }
            definitions.insert(row.component, row);
        }

        tracing::info!(
            version = %version,
            components = definitions.len(),
            "Component catalog loaded"
        );

        Ok(Self { version, definitions })
    }

    /// The built-in reference catalog (all 106 components)
    pub fn reference() -> Self {
        let definitions = reference::component_definitions()
            .into_iter()
            .map(|def| (def.component, def))
            .collect();

        Self {
            version: reference::REFERENCE_VERSION.to_string(),
            definitions,
        }
    }

    /// Look up a component definition
    ///
    /// # Errors
    /// [`UnknownComponentType`] if this catalog does not define `component`.
    pub fn lookup(&self, component: ComponentType) -> Result<&ComponentDefinition, UnknownComponentType> {
        self.definitions
            .get(&component)
            .ok_or(UnknownComponentType(component))
    }

    /// Whether the catalog defines `component`
    pub fn contains(&self, component: ComponentType) -> bool {
        self.definitions.contains_key(&component)
    }

    /// Catalog version identifier
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of defined components
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over definitions in canonical component order
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.definitions.values()
    }

    /// Iterate over the definitions in one category
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ComponentDefinition> {
        self.definitions
            .values()
            .filter(move |def| def.category == category)
    }
}

fn validate_row(row: &ComponentDefinition) -> Result<(), CatalogLoadError> {
    let expected = row.component.category();
    if row.category != expected {
        return Err(CatalogLoadError::CategoryMismatch {
            component: row.component,
            expected,
            declared: row.category,
        });
    }

    if !row.base_effectiveness.is_finite() || !(0.0..=100.0).contains(&row.base_effectiveness) {
        return Err(CatalogLoadError::BaseEffectivenessOutOfRange {
            component: row.component,
            value: row.base_effectiveness,
        });
    }

    if row.capacity_required > 100 {
        return Err(CatalogLoadError::CapacityOutOfRange {
            component: row.component,
            value: row.capacity_required,
        });
    }

    Ok(())
}
