use schemas_core::SchemaError;
use schemas_parser::ParserError;
use thiserror::Error;

/// Errors raised while building or querying a schema registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A description could not be parsed
    #[error("failed to parse schema '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: ParserError,
    },

    /// A description parsed but defines rules that can never hold
    #[error("invalid schema '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: SchemaError,
    },

    /// A schema directory or file could not be read
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// A second schema was registered under an existing name
    #[error("schema '{0}' is already registered")]
    DuplicateSchema(String),

    /// No schema is registered under the requested name
    #[error("no schema registered under '{0}'")]
    UnknownSchema(String),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
