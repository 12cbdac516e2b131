//! Component definitions - one immutable record per component type

use crate::{Category, ComponentType};
use serde::{Deserialize, Serialize};

/// How hard a component is to stand up and run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Can be adopted by almost any state
    Low,

    /// Needs a functioning administration
    Moderate,

    /// Needs deep institutional capacity
    High,

    /// Only sustainable for highly developed states
    Extreme,
}

impl ComplexityTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::High => "high",
            ComplexityTier::Extreme => "extreme",
        }
    }
}

/// Definition of a single component
///
/// Created once when a catalog is built and never mutated afterwards.
/// Range invariants are enforced by
/// [`ComponentCatalog::from_definitions`](crate::ComponentCatalog::from_definitions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// The component this row defines
    pub component: ComponentType,

    /// Category (must agree with `component.category()`)
    pub category: Category,

    /// Unmodified score in [0, 100]
    pub base_effectiveness: f64,

    /// One-off cost of introducing the component
    pub implementation_cost: u32,

    /// Recurring cost per period
    pub maintenance_cost: u32,

    /// State capacity needed to operate it, in [0, 100]
    pub capacity_required: u8,

    /// Complexity tier
    pub complexity_tier: ComplexityTier,

    /// Whether modern technology is a prerequisite
    pub technology_required: bool,
}

impl ComponentDefinition {
    /// Create a definition whose category is taken from the component type
    pub fn new(
        component: ComponentType,
        base_effectiveness: f64,
        implementation_cost: u32,
        maintenance_cost: u32,
        capacity_required: u8,
        complexity_tier: ComplexityTier,
        technology_required: bool,
    ) -> Self {
        Self {
            component,
            category: component.category(),
            base_effectiveness,
            implementation_cost,
            maintenance_cost,
            capacity_required,
            complexity_tier,
            technology_required,
        }
    }
}
