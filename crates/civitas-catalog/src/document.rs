//! Catalog documents - the on-disk form of a versioned catalog
//!
//! A document is a version string plus two row tables. In TOML:
//!
//! ```toml
//! version = "2025-q1"
//!
//! [[components]]
//! component = "RULE_OF_LAW"
//! base_effectiveness = 92.0
//! implementation_cost = 70
//! maintenance_cost = 40
//! capacity_required = 75
//! complexity_tier = "high"
//!
//! [[relationships]]
//! a = "RULE_OF_LAW"
//! b = "INDEPENDENT_JUDICIARY"
//! kind = "additive"
//! magnitude = 10.0
//! description = "Courts free from interference enforce the law evenly"
//! ```

use crate::LoaderError;
use civitas_domain::{
    Category, ComplexityTier, ComponentCatalog, ComponentDefinition, ComponentType, RelationshipEntry,
    RelationshipKind, RelationshipRegistry,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a document file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(DocumentFormat::Toml),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A versioned catalog as written by catalog authors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Version identifier; results are tied to it
    pub version: String,

    /// Component definition rows
    #[serde(default)]
    pub components: Vec<ComponentRow>,

    /// Relationship rows
    #[serde(default)]
    pub relationships: Vec<RelationshipRow>,
}

/// One component definition row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    /// Component identifier, e.g. `RULE_OF_LAW`
    pub component: String,

    /// Optional category; checked against the component's own when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Base effectiveness in [0, 100]
    pub base_effectiveness: f64,

    /// One-off cost
    #[serde(default)]
    pub implementation_cost: u32,

    /// Recurring cost
    #[serde(default)]
    pub maintenance_cost: u32,

    /// Capacity requirement in [0, 100]
    #[serde(default)]
    pub capacity_required: u8,

    /// Complexity tier
    #[serde(default = "default_complexity")]
    pub complexity_tier: ComplexityTier,

    /// Whether modern technology is required
    #[serde(default)]
    pub technology_required: bool,
}

fn default_complexity() -> ComplexityTier {
    ComplexityTier::Moderate
}

/// One relationship row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRow {
    /// First component
    pub a: String,

    /// Second component
    pub b: String,

    /// Additive or conflicting
    pub kind: RelationshipKind,

    /// Signed magnitude
    pub magnitude: f64,

    /// Explanation shown to users
    #[serde(default)]
    pub description: String,
}

impl CatalogDocument {
    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, LoaderError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(contents: &str) -> Result<Self, LoaderError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read a document, choosing the format from the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            DocumentFormat::Toml => Self::from_toml_str(&contents),
            DocumentFormat::Json => Self::from_json_str(&contents),
        }
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, LoaderError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Render as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, LoaderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the given format
    pub fn render(&self, format: DocumentFormat) -> Result<String, LoaderError> {
        match format {
            DocumentFormat::Toml => self.to_toml_string(),
            DocumentFormat::Json => self.to_json_string(),
        }
    }

    /// Write to a file, choosing the format from the file extension
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), LoaderError> {
        let path = path.as_ref();
        let rendered = self.render(DocumentFormat::from_path(path)?)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Snapshot existing tables as a document
    pub fn from_tables(catalog: &ComponentCatalog, registry: &RelationshipRegistry) -> Self {
        let components = catalog
            .iter()
            .map(|def| ComponentRow {
                component: def.component.as_str().to_string(),
                category: Some(def.category.as_str().to_string()),
                base_effectiveness: def.base_effectiveness,
                implementation_cost: def.implementation_cost,
                maintenance_cost: def.maintenance_cost,
                capacity_required: def.capacity_required,
                complexity_tier: def.complexity_tier,
                technology_required: def.technology_required,
            })
            .collect();

        let relationships = registry
            .iter()
            .map(|entry| RelationshipRow {
                a: entry.pair().low().as_str().to_string(),
                b: entry.pair().high().as_str().to_string(),
                kind: entry.kind(),
                magnitude: entry.magnitude(),
                description: entry.description().to_string(),
            })
            .collect();

        Self {
            version: catalog.version().to_string(),
            components,
            relationships,
        }
    }

    /// Resolve names and build validated tables
    ///
    /// # Errors
    /// Unknown component or category names, and every
    /// [`CatalogLoadError`](civitas_domain::CatalogLoadError) the domain
    /// constructors raise.
    pub fn into_tables(self) -> Result<(ComponentCatalog, RelationshipRegistry), LoaderError> {
        let mut definitions = Vec::with_capacity(self.components.len());
        for (row_idx, row) in self.components.into_iter().enumerate() {
            let component = resolve_component(&row.component, "components", row_idx)?;
            let category = match row.category.as_deref() {
                Some(name) => Category::parse(name).ok_or_else(|| LoaderError::UnknownCategory {
                    name: name.to_string(),
                    row: row_idx,
                })?,
                None => component.category(),
            };

            definitions.push(ComponentDefinition {
                component,
                category,
                base_effectiveness: row.base_effectiveness,
                implementation_cost: row.implementation_cost,
                maintenance_cost: row.maintenance_cost,
                capacity_required: row.capacity_required,
                complexity_tier: row.complexity_tier,
                technology_required: row.technology_required,
            });
        }
        let catalog = ComponentCatalog::from_definitions(self.version, definitions)?;

        let mut entries = Vec::with_capacity(self.relationships.len());
        for (row_idx, row) in self.relationships.into_iter().enumerate() {
            let a = resolve_component(&row.a, "relationships", row_idx)?;
            let b = resolve_component(&row.b, "relationships", row_idx)?;
            entries.push(RelationshipEntry::new(a, b, row.kind, row.magnitude, row.description)?);
        }
        let registry = RelationshipRegistry::from_entries(entries, &catalog)?;

        Ok((catalog, registry))
    }
}

fn resolve_component(name: &str, section: &'static str, row: usize) -> Result<ComponentType, LoaderError> {
    ComponentType::parse(name).ok_or_else(|| LoaderError::UnknownComponentName {
        name: name.to_string(),
        section,
        row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitas_domain::CatalogLoadError;

    const SMALL: &str = r#"
        version = "small-1"

        [[components]]
        component = "DEMOCRATIC_PROCESS"
        base_effectiveness = 75.0
        complexity_tier = "high"

        [[components]]
        component = "AUTOCRATIC_PROCESS"
        category = "Decision Process"
        base_effectiveness = 88.0

        [[components]]
        component = "RULE_OF_LAW"
        base_effectiveness = 92.0
        capacity_required = 75

        [[relationships]]
        a = "DEMOCRATIC_PROCESS"
        b = "AUTOCRATIC_PROCESS"
        kind = "conflicting"
        magnitude = -15.0
        description = "Cannot both prevail"

        [[relationships]]
        a = "RULE_OF_LAW"
        b = "DEMOCRATIC_PROCESS"
        kind = "additive"
        magnitude = 12.5
    "#;

    #[test]
    fn test_parse_and_build_toml() {
        let doc = CatalogDocument::from_toml_str(SMALL).unwrap();
        assert_eq!(doc.version, "small-1");
        assert_eq!(doc.components.len(), 3);
        assert_eq!(doc.components[1].complexity_tier, ComplexityTier::Moderate);

        let (catalog, registry) = doc.into_tables().unwrap();
        assert_eq!(catalog.version(), "small-1");
        assert_eq!(catalog.len(), 3);
        assert_eq!(registry.len(), 2);

        let rule = registry
            .lookup(ComponentType::DemocraticProcess, ComponentType::RuleOfLaw)
            .unwrap();
        assert_eq!(rule.magnitude(), 12.5);
        assert_eq!(
            catalog.lookup(ComponentType::RuleOfLaw).unwrap().capacity_required,
            75
        );
    }

    #[test]
    fn test_unknown_component_name_reports_row() {
        let doc = CatalogDocument::from_toml_str(
            r#"
            version = "bad"
            [[components]]
            component = "PHILOSOPHER_KING"
            base_effectiveness = 99.0
            "#,
        )
        .unwrap();

        match doc.into_tables() {
            Err(LoaderError::UnknownComponentName { name, section, row }) => {
                assert_eq!(name, "PHILOSOPHER_KING");
                assert_eq!(section, "components");
                assert_eq!(row, 0);
            }
            other => panic!("Expected UnknownComponentName, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let doc = CatalogDocument::from_toml_str(
            r#"
            version = "bad"
            [[components]]
            component = "RULE_OF_LAW"
            category = "astrology"
            base_effectiveness = 92.0
            "#,
        )
        .unwrap();
        assert!(matches!(doc.into_tables(), Err(LoaderError::UnknownCategory { row: 0, .. })));
    }

    #[test]
    fn test_ambiguous_pair_fails_loudly() {
        let mut doc = CatalogDocument::from_toml_str(SMALL).unwrap();
        doc.relationships.push(RelationshipRow {
            a: "AUTOCRATIC_PROCESS".to_string(),
            b: "DEMOCRATIC_PROCESS".to_string(),
            kind: RelationshipKind::Additive,
            magnitude: 10.0,
            description: String::new(),
        });

        match doc.into_tables() {
            Err(LoaderError::Catalog(CatalogLoadError::DuplicateRelationship { a, b })) => {
                assert_eq!(a, ComponentType::DemocraticProcess);
                assert_eq!(b, ComponentType::AutocraticProcess);
            }
            other => panic!("Expected DuplicateRelationship, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_base_fails_loudly() {
        let mut doc = CatalogDocument::from_toml_str(SMALL).unwrap();
        doc.components[0].base_effectiveness = 140.0;
        assert!(matches!(
            doc.into_tables(),
            Err(LoaderError::Catalog(CatalogLoadError::BaseEffectivenessOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")).unwrap(), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")).unwrap(), DocumentFormat::Json);
        assert!(matches!(
            DocumentFormat::from_path(Path::new("a.yaml")),
            Err(LoaderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_reference_tables_survive_export() {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog).unwrap();
        let doc = CatalogDocument::from_tables(&catalog, &registry);

        let json = doc.to_json_string().unwrap();
        let (rebuilt_catalog, rebuilt_registry) =
            CatalogDocument::from_json_str(&json).unwrap().into_tables().unwrap();

        assert_eq!(rebuilt_catalog.len(), 106);
        assert_eq!(rebuilt_registry.len(), 91);
        assert_eq!(rebuilt_catalog.version(), catalog.version());
    }
}
