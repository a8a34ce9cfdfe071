use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use schemas_core::{Schema, ValidationError};
use schemas_parser::{SchemaFormat, parse_description, parse_description_file};
use schemas_validator::SchemaValidator;
use serde_json::Value;
use tracing::{debug, info, trace};

use crate::catalog::predefined_validators;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};

const SCHEMA_SUFFIXES: [(&str, SchemaFormat); 4] = [
    (".schema.json", SchemaFormat::Json),
    (".schema.yaml", SchemaFormat::Yaml),
    (".schema.yml", SchemaFormat::Yaml),
    (".schema.toml", SchemaFormat::Toml),
];

/// Build a validator from a description held in memory.
///
/// Parse failures and definitions that can never hold (contradictory
/// bounds, invalid patterns) are returned as errors.
pub fn compile(name: &str, content: &str, format: SchemaFormat) -> Result<SchemaValidator> {
    let description = parse_description(content, format).map_err(|source| RegistryError::Parse {
        name: name.to_string(),
        source,
    })?;
    build(name, description.schema)
}

/// Build a validator from a description file.
///
/// The validator is named after the file: `create_user.schema.json` gives
/// `create_user`; any other file name falls back to its stem.
pub fn compile_file(path: &Path) -> Result<SchemaValidator> {
    let name = schema_name_for_path(path);
    let description = parse_description_file(path).map_err(|source| RegistryError::Parse {
        name: name.clone(),
        source,
    })?;
    build(&name, description.schema)
}

fn build(name: &str, schema: Schema) -> Result<SchemaValidator> {
    schema
        .ensure_valid()
        .map_err(|source| RegistryError::Invalid {
            name: name.to_string(),
            source,
        })?;
    Ok(SchemaValidator::new(name, schema))
}

/// Name-keyed set of validators, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    validators: BTreeMap<String, SchemaValidator>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            validators: BTreeMap::new(),
            config,
        }
    }

    /// Create a registry holding the predefined user and order validators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for validator in predefined_validators() {
            registry
                .validators
                .insert(validator.name().to_string(), validator);
        }
        registry
    }

    /// Load from embedded JSON descriptions.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        let mut registry = Self::new();
        for (name, content) in schemas {
            registry.register_description(name, content, SchemaFormat::Json)?;
        }
        Ok(registry)
    }

    /// Load schemas from a directory.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, RegistryConfig::default())
    }

    /// Load schemas from a directory with explicit config.
    pub fn from_directory_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::with_config(config);
        registry.load_directory(path)?;
        Ok(registry)
    }

    /// Register a validator under its own name.
    pub fn register(&mut self, validator: SchemaValidator) -> Result<()> {
        let name = validator.name().to_string();
        if self.validators.contains_key(&name) {
            return Err(RegistryError::DuplicateSchema(name));
        }

        debug!(schema = %name, fields = validator.schema().len(), "Registered schema");
        self.validators.insert(name, validator);
        Ok(())
    }

    /// Compile a description and register it under `name`.
    pub fn register_description(
        &mut self,
        name: &str,
        content: &str,
        format: SchemaFormat,
    ) -> Result<()> {
        let validator = compile(name, content, format)?;
        self.register(validator)
    }

    /// Load every `<name>.schema.{json,yaml,yml,toml}` file in `path`.
    ///
    /// Files are loaded in name order. Other files are skipped. Returns the
    /// number of schemas loaded.
    pub fn load_directory(&mut self, path: &Path) -> Result<usize> {
        let entries = std::fs::read_dir(path)
            .map_err(|err| RegistryError::LoadFailed(format!("{}: {err}", path.display())))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| RegistryError::LoadFailed(err.to_string()))?;
            files.push(entry.path());
        }
        files.sort();

        let mut loaded = 0usize;
        for file_path in files {
            let file_name = match file_path.file_name().and_then(|n| n.to_str()) {
                Some(file_name) => file_name,
                None => continue,
            };

            let (name, format) = match split_schema_file_name(file_name) {
                Some(parts) => parts,
                None => {
                    trace!(file = %file_path.display(), "Skipping non-schema file");
                    continue;
                }
            };

            let metadata = std::fs::symlink_metadata(&file_path)
                .map_err(|err| RegistryError::LoadFailed(err.to_string()))?;
            if metadata.file_type().is_symlink() {
                return Err(RegistryError::LoadFailed(format!(
                    "refusing to load schema symlink: {file_name}"
                )));
            }
            if !metadata.is_file() {
                continue;
            }

            loaded = loaded.saturating_add(1);
            if loaded > self.config.max_schemas_from_directory {
                return Err(RegistryError::LoadFailed(format!(
                    "schema count exceeds configured max ({}): {}",
                    self.config.max_schemas_from_directory, loaded
                )));
            }

            let content = self.read_limited(&file_path, metadata.len())?;
            self.register_description(name, &content, format)?;
            info!(schema = %name, path = %file_path.display(), "Loaded schema");
        }

        info!(directory = %path.display(), count = loaded, "Schema directory loaded");
        Ok(loaded)
    }

    fn read_limited(&self, path: &Path, len: u64) -> Result<String> {
        let max_bytes = self.config.max_schema_file_size;
        if len > max_bytes as u64 {
            return Err(RegistryError::LoadFailed(format!(
                "schema file too large ({len} bytes): {}",
                path.display()
            )));
        }

        let file = std::fs::File::open(path).map_err(|err| {
            RegistryError::LoadFailed(format!("failed opening schema {}: {err}", path.display()))
        })?;

        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|err| {
                RegistryError::LoadFailed(format!("failed reading schema {}: {err}", path.display()))
            })?;
        if content.len() > max_bytes {
            return Err(RegistryError::LoadFailed(format!(
                "schema file too large while reading: {}",
                path.display()
            )));
        }

        Ok(content)
    }

    /// Get the validator registered under `name`.
    pub fn get(&self, name: &str) -> Option<&SchemaValidator> {
        self.validators.get(name)
    }

    /// Validate a document against the schema registered under `name`.
    pub fn validate(&self, name: &str, document: &Value) -> Result<Vec<ValidationError>> {
        match self.validators.get(name) {
            Some(validator) => Ok(validator.validate(document)),
            None => self.missing(name),
        }
    }

    /// Validate raw JSON text against the schema registered under `name`.
    pub fn validate_str(&self, name: &str, json: &str) -> Result<Vec<ValidationError>> {
        match self.validators.get(name) {
            Some(validator) => Ok(validator.validate_str(json)),
            None => self.missing(name),
        }
    }

    fn missing(&self, name: &str) -> Result<Vec<ValidationError>> {
        if self.config.fail_on_missing_schema {
            return Err(RegistryError::UnknownSchema(name.to_string()));
        }
        debug!(schema = %name, "No schema registered, passing document");
        Ok(Vec::new())
    }

    /// Registered schema names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.validators.keys().map(String::as_str).collect()
    }

    /// Check if a schema is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Iterate over registered validators in name order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaValidator> {
        self.validators.values()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `create_user.schema.json` into (`create_user`, Json).
fn split_schema_file_name(file_name: &str) -> Option<(&str, SchemaFormat)> {
    let lower = file_name.to_ascii_lowercase();
    SCHEMA_SUFFIXES.iter().find_map(|(suffix, format)| {
        (lower.ends_with(suffix) && file_name.len() > suffix.len())
            .then(|| (&file_name[..file_name.len() - suffix.len()], *format))
    })
}

fn schema_name_for_path(path: &Path) -> String {
    let by_suffix = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(split_schema_file_name)
        .map(|(name, _)| name.to_string());

    by_suffix
        .or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| path.display().to_string())
}
