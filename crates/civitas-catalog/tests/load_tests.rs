//! File-based catalog loading tests

use civitas_catalog::{CatalogBundle, CatalogDocument, LoaderError};
use civitas_domain::{CatalogLoadError, ComponentType, RelationshipKind};
use std::fs;
use tempfile::TempDir;

const TOML_CATALOG: &str = r#"
version = "pilot-7"

[[components]]
component = "DEMOCRATIC_PROCESS"
base_effectiveness = 70.0

[[components]]
component = "ELECTORAL_LEGITIMACY"
base_effectiveness = 80.0

[[components]]
component = "RULE_OF_LAW"
base_effectiveness = 90.0

[[relationships]]
a = "ELECTORAL_LEGITIMACY"
b = "DEMOCRATIC_PROCESS"
kind = "additive"
magnitude = 5.0
"#;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pilot.toml");
    fs::write(&path, TOML_CATALOG).unwrap();

    let bundle = CatalogBundle::load(&path).unwrap();
    assert_eq!(bundle.version(), "pilot-7");
    assert_eq!(bundle.catalog().len(), 3);

    // Stored under the canonical pair whatever order the row used
    let rule = bundle
        .registry()
        .lookup(ComponentType::DemocraticProcess, ComponentType::ElectoralLegitimacy)
        .unwrap();
    assert_eq!(rule.pair().low(), ComponentType::DemocraticProcess);
    assert_eq!(rule.kind(), RelationshipKind::Additive);
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pilot.json");
    fs::write(
        &path,
        r#"{
            "version": "pilot-json",
            "components": [
                { "component": "free-press", "base_effectiveness": 79.0 },
                { "component": "censorship", "base_effectiveness": 56.0 }
            ],
            "relationships": [
                { "a": "FREE_PRESS", "b": "CENSORSHIP", "kind": "conflicting", "magnitude": -20.0 }
            ]
        }"#,
    )
    .unwrap();

    let bundle = CatalogBundle::load(&path).unwrap();
    assert_eq!(bundle.version(), "pilot-json");
    assert_eq!(bundle.registry().conflict_count(), 1);
}

#[test]
fn test_reversed_duplicate_pair_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dup.toml");
    let contents = format!(
        "{}\n[[relationships]]\na = \"DEMOCRATIC_PROCESS\"\nb = \"ELECTORAL_LEGITIMACY\"\nkind = \"additive\"\nmagnitude = 7.0\n",
        TOML_CATALOG
    );
    fs::write(&path, contents).unwrap();

    assert!(matches!(
        CatalogBundle::load(&path),
        Err(LoaderError::Catalog(CatalogLoadError::DuplicateRelationship { .. }))
    ));
}

#[test]
fn test_relationship_outside_catalog_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orphan.toml");
    let contents = format!(
        "{}\n[[relationships]]\na = \"RULE_OF_LAW\"\nb = \"FREE_PRESS\"\nkind = \"additive\"\nmagnitude = 7.0\n",
        TOML_CATALOG
    );
    fs::write(&path, contents).unwrap();

    assert!(matches!(
        CatalogBundle::load(&path),
        Err(LoaderError::Catalog(CatalogLoadError::UnknownRelationshipMember(_)))
    ));
}

#[test]
fn test_unknown_name_reports_relationship_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.toml");
    let contents = TOML_CATALOG.replace("b = \"DEMOCRATIC_PROCESS\"", "b = \"DEMOCRATIK_PROCESS\"");
    fs::write(&path, contents).unwrap();

    match CatalogBundle::load(&path) {
        Err(LoaderError::UnknownComponentName { name, section, row }) => {
            assert_eq!(name, "DEMOCRATIK_PROCESS");
            assert_eq!(section, "relationships");
            assert_eq!(row, 0);
        }
        other => panic!("Expected UnknownComponentName, got {:?}", other),
    }
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, TOML_CATALOG).unwrap();

    assert!(matches!(
        CatalogBundle::load(&path),
        Err(LoaderError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        CatalogBundle::load(dir.path().join("absent.toml")),
        Err(LoaderError::Io(_))
    ));
}

#[test]
fn test_export_reference_then_reload() {
    let dir = TempDir::new().unwrap();
    let reference = CatalogBundle::reference().unwrap();

    for name in ["reference.toml", "reference.json"] {
        let path = dir.path().join(name);
        reference.to_document().write_to_path(&path).unwrap();

        let reloaded = CatalogBundle::load(&path).unwrap();
        assert_eq!(reloaded.version(), reference.version());
        assert_eq!(reloaded.catalog().len(), 106);
        assert_eq!(reloaded.registry().len(), 91);

        let rule = reloaded
            .registry()
            .lookup(ComponentType::FreePress, ComponentType::Censorship)
            .unwrap();
        assert_eq!(rule.magnitude(), -15.0);
    }
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        CatalogDocument::from_toml_str("version = "),
        Err(LoaderError::TomlParse(_))
    ));
}
