//! Civitas Domain Layer
//!
//! This crate defines the closed vocabulary of governance components and the
//! static tables the effectiveness engine reads: the component catalog and the
//! pairwise relationship registry. Everything here is immutable once built.
//!
//! ## Key Concepts
//!
//! - **ComponentType**: one of 106 atomic building blocks, each in one of 11 categories
//! - **ComponentDefinition**: base effectiveness plus cost metadata for a component
//! - **RelationshipEntry**: a curated synergy or conflict between two components
//! - **ComponentPair**: canonical unordered pair, the single key for a rule
//!
//! ## Architecture
//!
//! - No global state: catalogs and registries are values passed by reference
//! - Construction validates data and fails with [`CatalogLoadError`]
//! - Lookups never mutate and are safe to share across threads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod category;
pub mod component;
pub mod definition;
pub mod error;
pub mod reference;
pub mod registry;
pub mod relationship;

// Re-exports for convenience
pub use catalog::ComponentCatalog;
pub use category::Category;
pub use component::{ComponentType, COMPONENT_COUNT};
pub use definition::{ComplexityTier, ComponentDefinition};
pub use error::{CatalogLoadError, UnknownComponentType};
pub use registry::RelationshipRegistry;
pub use relationship::{ComponentPair, RelationshipEntry, RelationshipKind};
