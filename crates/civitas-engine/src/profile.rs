//! Cost and capacity profile of a selection

use civitas_domain::{Category, ComplexityTier};
use serde::Serialize;
use std::collections::BTreeMap;

/// What it would take to run a selection
///
/// Aggregated from the cost metadata on each component definition. Does not
/// feed into the effectiveness score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionProfile {
    /// Sum of one-off implementation costs
    pub implementation_cost: u64,

    /// Sum of recurring maintenance costs
    pub maintenance_cost: u64,

    /// Highest capacity requirement among the components
    pub peak_capacity_required: u8,

    /// Highest complexity tier, `None` for an empty selection
    pub max_complexity: Option<ComplexityTier>,

    /// Whether any component needs modern technology
    pub technology_required: bool,

    /// Number of components per covered category
    pub categories: BTreeMap<Category, usize>,
}
