//! Effectiveness calculation
//!
//! Implements the deterministic scoring formula:
//! 1. Base aggregation (mean base effectiveness)
//! 2. Pair enumeration (all unordered pairs of the selection)
//! 3. Relationship adjustment (synergy bonus, conflict penalty)
//! 4. Clamping to [0, 100]

use crate::{EffectivenessResult, RankedResult, SelectionProfile};
use civitas_domain::{ComponentCatalog, ComponentType, RelationshipKind, RelationshipRegistry};
use civitas_validator::Selection;
use tracing::{debug, trace, warn};

/// Lower bound of the final score
pub const MIN_EFFECTIVENESS: f64 = 0.0;

/// Upper bound of the final score
pub const MAX_EFFECTIVENESS: f64 = 100.0;

/// Scores validated selections
///
/// Holds shared references only; one calculator can serve any number of
/// threads. `calculate` never fails and performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct EffectivenessCalculator<'a> {
    catalog: &'a ComponentCatalog,
    registry: &'a RelationshipRegistry,
}

impl<'a> EffectivenessCalculator<'a> {
    /// Create a calculator over a catalog and its relationship registry
    pub fn new(catalog: &'a ComponentCatalog, registry: &'a RelationshipRegistry) -> Self {
        Self { catalog, registry }
    }

    /// Score a selection
    ///
    /// Components are visited in canonical order, so the result is identical
    /// for every ordering of the original input. An empty selection scores 0.
    pub fn calculate(&self, selection: &Selection) -> EffectivenessResult {
        let components = self.resolve(selection);

        // Step 1: Base aggregation
        let base_effectiveness = self.mean_base(&components);

        // Steps 2-3: Pair enumeration and relationship adjustment
        let mut synergy_bonus = 0.0;
        let mut conflict_penalty = 0.0;
        let mut synergy_count = 0;
        let mut conflict_count = 0;
        let mut pairs_evaluated = 0;
        let mut fired_relationships = Vec::new();

        for (idx, &a) in components.iter().enumerate() {
            for &b in &components[idx + 1..] {
                pairs_evaluated += 1;

                let Some(entry) = self.registry.lookup(a, b) else {
                    continue;
                };

                trace!(pair = %entry.pair(), kind = %entry.kind(), magnitude = entry.magnitude(), "Rule fired");
                match entry.kind() {
                    RelationshipKind::Additive => {
                        synergy_count += 1;
                        synergy_bonus += entry.magnitude();
                    }
                    RelationshipKind::Conflicting => {
                        conflict_count += 1;
                        conflict_penalty += entry.magnitude().abs();
                    }
                }
                fired_relationships.push(entry.clone());
            }
        }

        // Step 4: Clamping
        let raw_total = base_effectiveness + synergy_bonus - conflict_penalty;
        let total_effectiveness = raw_total.clamp(MIN_EFFECTIVENESS, MAX_EFFECTIVENESS);

        debug!(
            components = components.len(),
            base = base_effectiveness,
            synergies = synergy_count,
            conflicts = conflict_count,
            raw = raw_total,
            total = total_effectiveness,
            "Effectiveness calculated"
        );

        EffectivenessResult {
            base_effectiveness,
            synergy_bonus,
            conflict_penalty,
            raw_total,
            total_effectiveness,
            synergy_count,
            conflict_count,
            fired_relationships,
            component_count: components.len(),
            pairs_evaluated,
            catalog_version: self.catalog.version().to_string(),
        }
    }

    /// Aggregate the cost metadata of a selection
    pub fn profile(&self, selection: &Selection) -> SelectionProfile {
        let mut profile = SelectionProfile::default();

        for component in self.resolve(selection) {
            let Ok(def) = self.catalog.lookup(component) else {
                continue;
            };
            profile.implementation_cost += u64::from(def.implementation_cost);
            profile.maintenance_cost += u64::from(def.maintenance_cost);
            profile.peak_capacity_required = profile.peak_capacity_required.max(def.capacity_required);
            profile.max_complexity = profile.max_complexity.max(Some(def.complexity_tier));
            profile.technology_required |= def.technology_required;
            *profile.categories.entry(def.category).or_insert(0) += 1;
        }

        profile
    }

    /// Score several selections and order them best first
    ///
    /// Ordered by `raw_total` so builds above the display cap stay
    /// distinguishable; ties keep input order.
    pub fn rank(&self, selections: &[Selection]) -> Vec<RankedResult> {
        let mut ranked: Vec<RankedResult> = selections
            .iter()
            .enumerate()
            .map(|(index, selection)| RankedResult {
                index,
                result: self.calculate(selection),
            })
            .collect();

        ranked.sort_by(|a, b| b.result.raw_total.total_cmp(&a.result.raw_total));
        ranked
    }

    /// Components of the selection this catalog can resolve, in canonical order
    ///
    /// A selection validated against a different catalog version may name
    /// components this catalog lacks; those are skipped rather than failing.
    fn resolve(&self, selection: &Selection) -> Vec<ComponentType> {
        if selection.catalog_version() != self.catalog.version() {
            warn!(
                selection = selection.catalog_version(),
                catalog = self.catalog.version(),
                "Selection was validated against a different catalog version"
            );
        }

        selection
            .iter()
            .filter(|component| {
                let known = self.catalog.contains(*component);
                if !known {
                    warn!(component = %component, "Skipping component missing from catalog");
                }
                known
            })
            .collect()
    }

    fn mean_base(&self, components: &[ComponentType]) -> f64 {
        if components.is_empty() {
            return 0.0;
        }

        let sum: f64 = components
            .iter()
            .filter_map(|c| self.catalog.lookup(*c).ok())
            .map(|def| def.base_effectiveness)
            .sum();

        sum / components.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitas_domain::{ComplexityTier, RelationshipEntry};
    use civitas_validator::{CoverageMode, SelectionValidator, ValidationConfig};

    fn open_config() -> ValidationConfig {
        ValidationConfig {
            min_size: 0,
            max_size: 106,
            coverage: CoverageMode::Lenient,
            required_categories: Vec::new(),
        }
    }

    fn select(catalog: &ComponentCatalog, components: &[ComponentType]) -> Selection {
        SelectionValidator::new(catalog, open_config())
            .unwrap()
            .validate(components)
            .unwrap()
    }

    #[test]
    fn test_reference_synergy_example() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let selection = select(
            &catalog,
            &[
                ComponentType::DemocraticProcess,
                ComponentType::ElectoralLegitimacy,
                ComponentType::RuleOfLaw,
            ],
        );
        let result = calculator.calculate(&selection);

        // (75 + 80 + 92) / 3 = 82.33
        assert!((result.base_effectiveness - 82.333).abs() < 0.01);
        assert_eq!(result.synergy_bonus, 30.0);
        assert_eq!(result.conflict_penalty, 0.0);
        assert_eq!(result.synergy_count, 3);
        assert_eq!(result.conflict_count, 0);
        assert_eq!(result.total_effectiveness, 100.0);
        assert!((result.raw_total - 112.333).abs() < 0.01);
        assert!(result.is_capped());
        assert_eq!(result.pairs_evaluated, 3);
        assert_eq!(result.fired_relationships.len(), 3);
    }

    #[test]
    fn test_reference_conflict_example() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let selection = select(
            &catalog,
            &[ComponentType::DemocraticProcess, ComponentType::AutocraticProcess],
        );
        let result = calculator.calculate(&selection);

        assert_eq!(result.base_effectiveness, 81.5);
        assert_eq!(result.conflict_count, 1);
        assert_eq!(result.conflict_penalty, 15.0);
        assert_eq!(result.total_effectiveness, 66.5);
        assert!(!result.is_capped());
        assert_eq!(result.clamp_adjustment(), 0.0);
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let result = calculator.calculate(&select(&catalog, &[]));
        assert_eq!(result.base_effectiveness, 0.0);
        assert_eq!(result.total_effectiveness, 0.0);
        assert_eq!(result.pairs_evaluated, 0);
        assert!(result.fired_relationships.is_empty());
    }

    #[test]
    fn test_no_relationships_scores_base() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        // 74 (STRATEGIC_RESERVES) and 81 (ACADEMIC_FREEDOM), unrelated
        let result = calculator.calculate(&select(
            &catalog,
            &[ComponentType::StrategicReserves, ComponentType::AcademicFreedom],
        ));
        assert_eq!(result.base_effectiveness, 77.5);
        assert_eq!(result.total_effectiveness, 77.5);
        assert_eq!(result.pairs_evaluated, 1);
    }

    #[test]
    fn test_magnitudes_come_from_registry_data() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::from_entries(
            vec![RelationshipEntry::new(
                ComponentType::FreePress,
                ComponentType::Censorship,
                RelationshipKind::Conflicting,
                -500.0,
                "rebalanced",
            )
            .unwrap()],
            &catalog,
        )
        .unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let result = calculator.calculate(&select(
            &catalog,
            &[ComponentType::FreePress, ComponentType::Censorship],
        ));
        assert_eq!(result.conflict_penalty, 500.0);
        assert_eq!(result.total_effectiveness, 0.0);
        assert!(result.is_floored());
    }

    #[test]
    fn test_largest_accepted_magnitudes_stay_in_range() {
        let catalog = ComponentCatalog::reference();
        let rule = |a, b, kind, magnitude| RelationshipEntry::new(a, b, kind, magnitude, "extreme").unwrap();
        let registry = RelationshipRegistry::from_entries(
            vec![
                rule(ComponentType::FreePress, ComponentType::OpenData, RelationshipKind::Additive, 1.7e308),
                rule(ComponentType::RuleOfLaw, ComponentType::Censorship, RelationshipKind::Conflicting, -1.7e308),
            ],
            &catalog,
        )
        .unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let result = calculator.calculate(&select(
            &catalog,
            &[
                ComponentType::FreePress,
                ComponentType::OpenData,
                ComponentType::RuleOfLaw,
                ComponentType::Censorship,
            ],
        ));
        assert!(result.synergy_bonus.is_finite());
        assert!(result.conflict_penalty.is_finite());
        assert!(!result.raw_total.is_nan());
        assert!((MIN_EFFECTIVENESS..=MAX_EFFECTIVENESS).contains(&result.total_effectiveness));
    }

    #[test]
    fn test_net_effect_for_component() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let result = calculator.calculate(&select(
            &catalog,
            &[
                ComponentType::DemocraticProcess,
                ComponentType::AutocraticProcess,
                ComponentType::RuleOfLaw,
                ComponentType::FreePress,
            ],
        ));

        // +10 rule of law, +10 free press, -15 autocratic
        assert_eq!(result.net_effect_for(ComponentType::DemocraticProcess), 5.0);
        assert_eq!(result.net_effect_for(ComponentType::AutocraticProcess), -15.0);
        assert_eq!(result.net_effect_for(ComponentType::Monarchy), 0.0);
    }

    #[test]
    fn test_profile_aggregates_costs() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let profile = calculator.profile(&select(
            &catalog,
            &[ComponentType::DemocraticProcess, ComponentType::RuleOfLaw, ComponentType::OpenData],
        ));

        assert_eq!(profile.implementation_cost, 60 + 70 + 45);
        assert_eq!(profile.maintenance_cost, 40 + 40 + 20);
        assert_eq!(profile.peak_capacity_required, 75);
        assert_eq!(profile.max_complexity, Some(ComplexityTier::High));
        assert!(profile.technology_required);
        assert_eq!(profile.categories.len(), 3);
    }

    #[test]
    fn test_profile_of_empty_selection() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        assert_eq!(calculator.profile(&select(&catalog, &[])), SelectionProfile::default());
    }

    #[test]
    fn test_rank_orders_by_raw_total() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let calculator = EffectivenessCalculator::new(&catalog, &registry);

        let conflict = select(&catalog, &[ComponentType::DemocraticProcess, ComponentType::AutocraticProcess]);
        let capped = select(
            &catalog,
            &[
                ComponentType::DemocraticProcess,
                ComponentType::ElectoralLegitimacy,
                ComponentType::RuleOfLaw,
            ],
        );
        let more_capped = select(
            &catalog,
            &[
                ComponentType::DemocraticProcess,
                ComponentType::ElectoralLegitimacy,
                ComponentType::RuleOfLaw,
                ComponentType::ElectoralCommission,
            ],
        );

        let ranked = calculator.rank(&[conflict, capped, more_capped]);
        let order: Vec<_> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(ranked[0].result.total_effectiveness, ranked[1].result.total_effectiveness);
    }

    #[test]
    fn test_foreign_catalog_components_are_skipped() {
        let full = ComponentCatalog::reference();
        let selection = select(
            &full,
            &[ComponentType::DemocraticProcess, ComponentType::AutocraticProcess],
        );

        let partial = ComponentCatalog::from_definitions(
            "partial",
            civitas_domain::reference::component_definitions()
                .into_iter()
                .filter(|d| d.component != ComponentType::AutocraticProcess),
        )
        .unwrap();
        let registry = RelationshipRegistry::default();
        let calculator = EffectivenessCalculator::new(&partial, &registry);

        let result = calculator.calculate(&selection);
        assert_eq!(result.component_count, 1);
        assert_eq!(result.base_effectiveness, 75.0);
        assert_eq!(result.catalog_version, "partial");
    }
}
