//! End-to-end tests: text input through validation to a serialized result

use civitas_domain::{ComponentCatalog, ComponentType, RelationshipRegistry};
use civitas_engine::EffectivenessCalculator;
use civitas_validator::{SelectionValidator, ValidationConfig, Violation};

#[test]
fn test_validate_then_calculate() {
    let catalog = ComponentCatalog::reference();
    let registry = RelationshipRegistry::reference(&catalog).unwrap();
    let validator = SelectionValidator::default_config(&catalog);
    let calculator = EffectivenessCalculator::new(&catalog, &registry);

    let selection = validator
        .validate_names(&[
            "REPRESENTATIVE_DEMOCRACY",
            "BICAMERAL_LEGISLATURE",
            "ELECTORAL_LEGITIMACY",
            "TERM_LIMITS",
            "CHARISMATIC_LEGITIMACY",
        ])
        .unwrap();
    let result = calculator.calculate(&selection);

    // 78 + 73 + 80 + 75 + 58 = 364 / 5
    assert!((result.base_effectiveness - 72.8).abs() < 1e-9);
    // rep+bicameral, rep+electoral, term limits+electoral
    assert_eq!(result.synergy_count, 3);
    // term limits vs charismatic
    assert_eq!(result.conflict_count, 1);
    assert!((result.total_effectiveness - 87.8).abs() < 1e-9);
    assert_eq!(result.pairs_evaluated, 10);
}

#[test]
fn test_rejected_selection_never_reaches_calculator() {
    let catalog = ComponentCatalog::reference();
    let validator = SelectionValidator::default_config(&catalog);

    let err = validator
        .validate_names(&["DEMOCRATIC_PROCESS", "ELECTORAL_LEGITIMACY"])
        .unwrap_err();
    assert_eq!(
        err.violations,
        vec![
            Violation::BelowMinimumSize { actual: 2, minimum: 3 },
            Violation::MissingRequiredCategory {
                category: civitas_domain::Category::Institution
            },
        ]
    );
}

#[test]
fn test_result_serializes_to_json() {
    let catalog = ComponentCatalog::reference();
    let registry = RelationshipRegistry::reference(&catalog).unwrap();
    let selection = SelectionValidator::new(&catalog, ValidationConfig::preview())
        .unwrap()
        .validate(&[ComponentType::DemocraticProcess, ComponentType::AutocraticProcess])
        .unwrap();
    let result = EffectivenessCalculator::new(&catalog, &registry).calculate(&selection);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total_effectiveness"], 66.5);
    assert_eq!(json["conflict_count"], 1);
    assert_eq!(json["catalog_version"], "reference-1");

    let fired = &json["fired_relationships"][0];
    assert_eq!(fired["low"], "DEMOCRATIC_PROCESS");
    assert_eq!(fired["high"], "AUTOCRATIC_PROCESS");
    assert_eq!(fired["kind"], "conflicting");
    assert_eq!(fired["magnitude"], -15.0);
}

#[test]
fn test_selection_remembers_catalog_version() {
    let catalog = ComponentCatalog::reference();
    let registry = RelationshipRegistry::reference(&catalog).unwrap();
    let selection = SelectionValidator::default_config(&catalog)
        .validate(&[
            ComponentType::TechnocraticProcess,
            ComponentType::ProfessionalBureaucracy,
            ComponentType::MeritBasedCivilService,
        ])
        .unwrap();
    let result = EffectivenessCalculator::new(&catalog, &registry).calculate(&selection);

    assert_eq!(selection.catalog_version(), result.catalog_version);
}
