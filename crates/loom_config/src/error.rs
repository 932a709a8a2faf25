//! Error types for configuration loading and validation.

use loom_ir::CatalogError;

/// Errors that can occur when loading project, catalog, or design files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading a file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A value could not be written out as TOML.
    #[error("failed to serialize: {0}")]
    SerializeError(String),

    /// The IP-core files do not form a valid catalog.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}
