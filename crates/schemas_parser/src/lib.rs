//! Parser for schema descriptions (JSON/YAML/TOML formats).
//!
//! A schema description is a JSON-Schema style document restricted to what
//! the validation engine evaluates: an object with flat scalar `properties`
//! and a `required` list. This crate turns such documents into the
//! strongly-typed [`Schema`].
//!
//! Keywords outside that subset (`$schema`, `title`, `default`,
//! `multipleOf`, ...) are read where useful and otherwise ignored.
//! `additionalProperties` is recorded but never enforced.
//!
//! # Example
//!
//! ```rust
//! use schemas_parser::parse_json;
//!
//! let json = r#"{
//!     "$schema": "http://json-schema.org/draft-07/schema#",
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string", "minLength": 2, "maxLength": 100 },
//!         "email": { "type": "string", "format": "email", "maxLength": 255 }
//!     },
//!     "required": ["name", "email"],
//!     "additionalProperties": false
//! }"#;
//!
//! let schema = parse_json(json).expect("Failed to parse schema");
//! assert_eq!(schema.len(), 2);
//! assert!(schema.is_required("email"));
//! ```

use schemas_core::{FieldSchema, Schema};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during schema description parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The described document is not an object
    #[error("Schema must describe an object, found type '{0}'")]
    NotAnObjectSchema(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported description file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// A parsed schema description.
///
/// Carries the [`Schema`] plus the descriptive keywords of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescription {
    /// `title` keyword
    pub title: Option<String>,

    /// `description` keyword
    pub description: Option<String>,

    /// `additionalProperties` keyword; recorded, not enforced
    pub additional_properties: Option<bool>,

    /// The field rules and required set
    pub schema: Schema,
}

/// On-disk shape of a description, before conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescription {
    #[serde(rename = "type", default)]
    doc_type: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    additional_properties: Option<bool>,

    #[serde(default)]
    properties: BTreeMap<String, FieldSchema>,

    #[serde(default)]
    required: Vec<String>,
}

impl TryFrom<RawDescription> for SchemaDescription {
    type Error = ParserError;

    fn try_from(raw: RawDescription) -> Result<Self> {
        if let Some(doc_type) = raw.doc_type {
            if doc_type != "object" {
                return Err(ParserError::NotAnObjectSchema(doc_type));
            }
        }

        let schema = raw
            .properties
            .into_iter()
            .fold(Schema::new(), |schema, (name, field)| {
                schema.add_property(name, field)
            })
            .add_required_all(raw.required);

        Ok(SchemaDescription {
            title: raw.title,
            description: raw.description,
            additional_properties: raw.additional_properties,
            schema,
        })
    }
}

/// Parse a schema description from a string in the given format.
pub fn parse_description(content: &str, format: SchemaFormat) -> Result<SchemaDescription> {
    let raw: RawDescription = match format {
        SchemaFormat::Json => serde_json::from_str(content)?,
        SchemaFormat::Yaml => serde_yaml_ng::from_str(content)?,
        SchemaFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?
        }
    };
    raw.try_into()
}

/// Parse a schema from a JSON description.
///
/// # Example
///
/// ```rust
/// use schemas_parser::parse_json;
///
/// let schema = parse_json(r#"{
///     "type": "object",
///     "properties": { "id": { "type": "integer" } },
///     "required": ["id"]
/// }"#).unwrap();
///
/// assert!(schema.is_required("id"));
/// ```
pub fn parse_json(content: &str) -> Result<Schema> {
    parse_description(content, SchemaFormat::Json).map(|d| d.schema)
}

/// Parse a schema from a YAML description.
///
/// # Example
///
/// ```rust
/// use schemas_parser::parse_yaml;
///
/// let yaml = r#"
/// type: object
/// properties:
///   sortOrder:
///     type: string
///     enum: [asc, desc]
/// "#;
///
/// let schema = parse_yaml(yaml).unwrap();
/// assert_eq!(schema.property("sortOrder").unwrap().enum_values.len(), 2);
/// ```
pub fn parse_yaml(content: &str) -> Result<Schema> {
    parse_description(content, SchemaFormat::Yaml).map(|d| d.schema)
}

/// Parse a schema from a TOML description.
///
/// # Example
///
/// ```rust
/// use schemas_parser::parse_toml;
///
/// let toml = r#"
/// type = "object"
/// required = ["quantity"]
///
/// [properties.quantity]
/// type = "integer"
/// minimum = 1
/// maximum = 1000
/// "#;
///
/// let schema = parse_toml(toml).unwrap();
/// assert!(schema.is_required("quantity"));
/// ```
pub fn parse_toml(content: &str) -> Result<Schema> {
    parse_description(content, SchemaFormat::Toml).map(|d| d.schema)
}

/// Detect the description format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `SchemaFormat::Json`
/// * `.yaml`, `.yml` → `SchemaFormat::Yaml`
/// * `.toml` → `SchemaFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(SchemaFormat::Json),
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        "toml" => Ok(SchemaFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema description from a file with automatic format detection.
pub fn parse_description_file(path: &Path) -> Result<SchemaDescription> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_description(&content, format)
}

/// Parse a schema from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use schemas_parser::parse_file;
/// use std::path::Path;
///
/// let schema = parse_file(Path::new("schemas/create_user.schema.json")).unwrap();
/// println!("Loaded schema with {} fields", schema.len());
/// ```
pub fn parse_file(path: &Path) -> Result<Schema> {
    parse_description_file(path).map(|d| d.schema)
}
