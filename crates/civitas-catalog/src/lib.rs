//! Civitas Catalog Loader
//!
//! Reads versioned catalog documents (TOML or JSON) into validated
//! [`ComponentCatalog`](civitas_domain::ComponentCatalog) and
//! [`RelationshipRegistry`](civitas_domain::RelationshipRegistry) values, and
//! writes existing tables back out. Loading fails on the first bad row; a
//! partially loaded catalog is never returned.

#![warn(missing_docs)]

mod bundle;
mod document;
mod error;

pub use bundle::CatalogBundle;
pub use document::{CatalogDocument, ComponentRow, DocumentFormat, RelationshipRow};
pub use error::LoaderError;
