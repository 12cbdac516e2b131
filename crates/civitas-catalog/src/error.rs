//! Catalog loader error types

use civitas_domain::CatalogLoadError;
use thiserror::Error;

/// Errors raised while reading, parsing or building a catalog document
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Failed to read or write the document file
    #[error("Failed to access catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse catalog TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to render catalog TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// Failed to parse or render JSON
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// A row names a component that does not exist
    #[error("Unknown component `{name}` in {section} row {row}")]
    UnknownComponentName {
        /// The name as written
        name: String,
        /// `components` or `relationships`
        section: &'static str,
        /// Zero-based row index
        row: usize,
    },

    /// A component row names a category that does not exist
    #[error("Unknown category `{name}` in components row {row}")]
    UnknownCategory {
        /// The name as written
        name: String,
        /// Zero-based row index
        row: usize,
    },

    /// The rows parsed but violate a catalog invariant
    #[error("Invalid catalog data: {0}")]
    Catalog(#[from] CatalogLoadError),
}
