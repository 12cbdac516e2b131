//! Validated selections

use civitas_domain::{Category, ComponentType};
use serde::Serialize;
use std::collections::BTreeSet;

/// A non-fatal observation made while validating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum SelectionWarning {
    /// A component appeared more than once in the input; extras were dropped
    DuplicateRemoved {
        /// The repeated component
        component: ComponentType,
        /// How many times it appeared
        occurrences: usize,
    },

    /// A required category is uncovered (lenient mode only)
    MissingCategory {
        /// The uncovered category
        category: Category,
    },
}

/// A validated set of components, ready to be scored
///
/// Only [`SelectionValidator`](crate::SelectionValidator) can build one, so
/// holding a `Selection` means the structural rules were checked against
/// the catalog named by [`catalog_version`](Selection::catalog_version).
/// Components are kept in canonical order; input order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    components: BTreeSet<ComponentType>,
    warnings: Vec<SelectionWarning>,
    catalog_version: String,
}

impl Selection {
    pub(crate) fn new(
        components: BTreeSet<ComponentType>,
        warnings: Vec<SelectionWarning>,
        catalog_version: String,
    ) -> Self {
        Self {
            components,
            warnings,
            catalog_version,
        }
    }

    /// Components in canonical order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ComponentType> + Clone + '_ {
        self.components.iter().copied()
    }

    /// Underlying set
    pub fn components(&self) -> &BTreeSet<ComponentType> {
        &self.components
    }

    /// Number of distinct components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Whether `component` is selected
    pub fn contains(&self, component: ComponentType) -> bool {
        self.components.contains(&component)
    }

    /// Warnings produced during validation
    pub fn warnings(&self) -> &[SelectionWarning] {
        &self.warnings
    }

    /// Version of the catalog this selection was validated against
    pub fn catalog_version(&self) -> &str {
        &self.catalog_version
    }

    /// Categories covered by at least one component
    pub fn categories(&self) -> BTreeSet<Category> {
        self.components.iter().map(|c| c.category()).collect()
    }
}
