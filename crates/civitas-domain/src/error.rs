//! Domain error types

use crate::{Category, ComponentType};
use thiserror::Error;

/// A component was requested from a catalog that does not define it
///
/// Unreachable for the built-in reference catalog; reachable for catalogs
/// built from external data that omit some rows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown component type: {0} is not defined in this catalog")]
pub struct UnknownComponentType(pub ComponentType);

/// Malformed or ambiguous static data detected while building a catalog
///
/// These are fatal at startup; nothing at request time can recover from them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogLoadError {
    /// The same component was defined more than once
    #[error("Duplicate definition for component {0}")]
    DuplicateComponent(ComponentType),

    /// Base effectiveness outside [0, 100] or not a finite number
    #[error("Base effectiveness {value} for {component} is outside [0, 100]")]
    BaseEffectivenessOutOfRange {
        /// Offending component
        component: ComponentType,
        /// Supplied value
        value: f64,
    },

    /// Capacity requirement outside [0, 100]
    #[error("Capacity requirement {value} for {component} is outside [0, 100]")]
    CapacityOutOfRange {
        /// Offending component
        component: ComponentType,
        /// Supplied value
        value: u8,
    },

    /// A row declares a category other than the component's own
    #[error("Component {component} belongs to {expected}, row declares {declared}")]
    CategoryMismatch {
        /// Offending component
        component: ComponentType,
        /// Category fixed by the component type
        expected: Category,
        /// Category stated in the row
        declared: Category,
    },

    /// A relationship pairs a component with itself
    #[error("Relationship pairs {0} with itself")]
    SelfRelationship(ComponentType),

    /// The same unordered pair has more than one rule
    #[error("Ambiguous relationship: pair ({a}, {b}) is defined more than once")]
    DuplicateRelationship {
        /// Lower member of the canonical pair
        a: ComponentType,
        /// Higher member of the canonical pair
        b: ComponentType,
    },

    /// A relationship references a component the catalog does not define
    #[error("Relationship references {0}, which is not in the catalog")]
    UnknownRelationshipMember(ComponentType),

    /// Magnitude sign disagrees with the relationship kind, or is not finite
    #[error("Invalid magnitude {magnitude} for {kind} relationship ({a}, {b})")]
    InvalidMagnitude {
        /// Lower member of the canonical pair
        a: ComponentType,
        /// Higher member of the canonical pair
        b: ComponentType,
        /// Kind label
        kind: &'static str,
        /// Supplied magnitude
        magnitude: f64,
    },

    /// The magnitudes of one kind sum past the range of `f64`
    #[error("Combined {kind} magnitudes overflow; scores would not be finite")]
    MagnitudeOverflow {
        /// Kind label
        kind: &'static str,
    },
}
