pub mod list;
pub mod show;
pub mod validate;

use anyhow::{Context, Result, bail};
use schemas_sdk::{SchemaRegistry, SchemaValidator, compile_file};
use std::path::Path;
use tracing::debug;

/// Predefined schemas plus any descriptions found in `schemas_dir`.
pub fn load_registry(schemas_dir: Option<&Path>) -> Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::with_defaults();

    if let Some(dir) = schemas_dir {
        registry
            .load_directory(dir)
            .with_context(|| format!("Failed to load schemas from {}", dir.display()))?;
    }

    debug!(schemas = registry.len(), "Registry ready");
    Ok(registry)
}

/// Look `schema` up by name, falling back to a description file path.
pub fn resolve_validator(registry: &SchemaRegistry, schema: &str) -> Result<SchemaValidator> {
    if let Some(validator) = registry.get(schema) {
        return Ok(validator.clone());
    }

    let path = Path::new(schema);
    if path.is_file() {
        debug!(path = %path.display(), "Compiling schema from file");
        return compile_file(path)
            .with_context(|| format!("Failed to load schema file: {}", schema));
    }

    bail!(
        "Unknown schema '{}'. Known schemas: {}",
        schema,
        registry.names().join(", ")
    )
}
