//! Calculation results and diagnostics

use crate::{MAX_EFFECTIVENESS, MIN_EFFECTIVENESS};
use civitas_domain::{ComponentType, RelationshipEntry};
use serde::Serialize;

/// Outcome of scoring one selection
///
/// `total_effectiveness == clamp(raw_total, 0, 100)` and
/// `raw_total == base_effectiveness + synergy_bonus - conflict_penalty`.
/// `fired_relationships` lists every rule that matched, in canonical pair
/// order, so a caller can explain the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectivenessResult {
    /// Mean base effectiveness of the selected components
    pub base_effectiveness: f64,

    /// Sum of additive magnitudes
    pub synergy_bonus: f64,

    /// Sum of absolute conflicting magnitudes
    pub conflict_penalty: f64,

    /// Score before clamping
    pub raw_total: f64,

    /// Final score in [0, 100]
    pub total_effectiveness: f64,

    /// Number of additive rules that fired
    pub synergy_count: usize,

    /// Number of conflicting rules that fired
    pub conflict_count: usize,

    /// Every rule that fired
    pub fired_relationships: Vec<RelationshipEntry>,

    /// Distinct components scored
    pub component_count: usize,

    /// Unordered pairs checked against the registry
    pub pairs_evaluated: usize,

    /// Catalog version the result is tied to
    pub catalog_version: String,
}

impl EffectivenessResult {
    /// Net signed effect of the fired rules that involve `component`
    pub fn net_effect_for(&self, component: ComponentType) -> f64 {
        self.fired_relationships
            .iter()
            .filter(|rel| rel.pair().contains(component))
            .map(|rel| rel.magnitude())
            .sum()
    }

    /// Whether clamping cut the score down to [`MAX_EFFECTIVENESS`]
    pub fn is_capped(&self) -> bool {
        self.raw_total > MAX_EFFECTIVENESS
    }

    /// Whether clamping lifted the score up to [`MIN_EFFECTIVENESS`]
    pub fn is_floored(&self) -> bool {
        self.raw_total < MIN_EFFECTIVENESS
    }

    /// Amount removed or added by clamping (`raw_total - total_effectiveness`)
    pub fn clamp_adjustment(&self) -> f64 {
        self.raw_total - self.total_effectiveness
    }
}

/// One entry of a ranking produced by
/// [`EffectivenessCalculator::rank`](crate::EffectivenessCalculator::rank)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// Position of the selection in the input slice
    pub index: usize,

    /// Its score
    pub result: EffectivenessResult,
}
