//! A catalog paired with its relationship registry

use crate::document::CatalogDocument;
use crate::LoaderError;
use civitas_domain::{ComponentCatalog, RelationshipRegistry};
use std::path::Path;
use tracing::info;

/// Validated tables for one catalog version
///
/// The engine borrows both halves; the bundle owns them so callers can load
/// once and share the value across threads.
#[derive(Debug, Clone)]
pub struct CatalogBundle {
    catalog: ComponentCatalog,
    registry: RelationshipRegistry,
}

impl CatalogBundle {
    /// The built-in reference catalog and its 91 rules
    pub fn reference() -> Result<Self, LoaderError> {
        let catalog = ComponentCatalog::reference();
        let registry = RelationshipRegistry::reference(&catalog)?;
        Ok(Self { catalog, registry })
    }

    /// Build from a parsed document
    pub fn from_document(document: CatalogDocument) -> Result<Self, LoaderError> {
        let (catalog, registry) = document.into_tables()?;
        Ok(Self { catalog, registry })
    }

    /// Load a `.toml` or `.json` catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bundle = Self::from_document(CatalogDocument::from_path(path)?)?;

        info!(
            path = %path.display(),
            version = bundle.version(),
            components = bundle.catalog.len(),
            relationships = bundle.registry.len(),
            "Loaded catalog file"
        );

        Ok(bundle)
    }

    /// Load from `path` when given, otherwise the reference catalog
    pub fn load_or_reference(path: Option<&Path>) -> Result<Self, LoaderError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::reference(),
        }
    }

    /// Catalog version identifier
    pub fn version(&self) -> &str {
        self.catalog.version()
    }

    /// Component definitions
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Relationship rules
    pub fn registry(&self) -> &RelationshipRegistry {
        &self.registry
    }

    /// Snapshot as a document for export
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument::from_tables(&self.catalog, &self.registry)
    }
}
