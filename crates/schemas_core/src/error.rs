//! Error types for request schemas.
//!
//! [`ValidationError`] is a violation found in a document; it is returned as
//! data, never raised. [`SchemaError`] covers problems with the schema
//! itself and with reading reports back in.

use crate::{Bound, FieldFormat, FieldType};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Field name used for document-level errors.
pub const ROOT_FIELD: &str = "root";

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while building or reading schema artifacts.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema definition contains rules no value can satisfy
    #[error("Invalid schema definition: {0}")]
    InvalidDefinition(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Machine-readable classification of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Input is not JSON, or not a JSON object
    InvalidFormat,
    /// Required field absent or null
    MissingRequiredField,
    /// Value has the wrong JSON type
    InvalidFieldType,
    /// Value not in the enum, or not matching the pattern
    InvalidFieldValue,
    /// String longer than `maxLength`
    FieldTooLong,
    /// String shorter than `minLength`
    FieldTooShort,
    /// String is not an email address
    InvalidEmailFormat,
    /// String is not `YYYY-MM-DD`
    InvalidDateFormat,
    /// Number outside `minimum`/`maximum`
    ValueOutOfRange,
}

impl ErrorKind {
    /// Returns the error code, e.g. `MISSING_REQUIRED_FIELD`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "INVALID_FORMAT",
            ErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorKind::InvalidFieldType => "INVALID_FIELD_TYPE",
            ErrorKind::InvalidFieldValue => "INVALID_FIELD_VALUE",
            ErrorKind::FieldTooLong => "FIELD_TOO_LONG",
            ErrorKind::FieldTooShort => "FIELD_TOO_SHORT",
            ErrorKind::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            ErrorKind::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorKind::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One rule violation found in a document.
///
/// Serializes as `{"field", "message", "code", "context"?}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Offending property, or `"root"` for document-level errors
    pub field: String,

    /// Human-readable explanation
    pub message: String,

    /// Error classification
    #[serde(rename = "code")]
    pub kind: ErrorKind,

    /// The violated constraint, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
            context: None,
        }
    }

    /// Attaches the violated constraint.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Input could not be parsed as JSON.
    pub fn invalid_json(detail: impl fmt::Display) -> Self {
        Self::new(
            ROOT_FIELD,
            ErrorKind::InvalidFormat,
            format!("Invalid JSON format: {}", detail),
        )
    }

    /// Input parsed but is not a JSON object.
    pub fn not_an_object() -> Self {
        Self::new(
            ROOT_FIELD,
            ErrorKind::InvalidFormat,
            "Input must be a JSON object",
        )
    }

    /// Required field is absent.
    pub fn missing(field: &str) -> Self {
        Self::new(
            field,
            ErrorKind::MissingRequiredField,
            format!("Required field '{}' is missing", field),
        )
    }

    /// Required field is present but null.
    pub fn null_required(field: &str) -> Self {
        Self::new(
            field,
            ErrorKind::MissingRequiredField,
            format!("Required field '{}' cannot be null", field),
        )
    }

    /// Value has the wrong JSON type.
    pub fn type_mismatch(field: &str, expected: FieldType) -> Self {
        Self::new(
            field,
            ErrorKind::InvalidFieldType,
            format!("Field '{}' must be {}", field, expected.with_article()),
        )
    }

    /// String shorter than `min` characters.
    pub fn too_short(field: &str, min: usize) -> Self {
        Self::new(
            field,
            ErrorKind::FieldTooShort,
            format!("Field '{}' must be at least {} characters", field, min),
        )
        .with_context(format!("minLength: {}", min))
    }

    /// String longer than `max` characters.
    pub fn too_long(field: &str, max: usize) -> Self {
        Self::new(
            field,
            ErrorKind::FieldTooLong,
            format!("Field '{}' must be at most {} characters", field, max),
        )
        .with_context(format!("maxLength: {}", max))
    }

    /// String does not have the expected format.
    pub fn invalid_format(field: &str, format: FieldFormat) -> Self {
        match format {
            FieldFormat::Email => Self::new(
                field,
                ErrorKind::InvalidEmailFormat,
                format!("Field '{}' must be a valid email address", field),
            ),
            FieldFormat::Date => Self::new(
                field,
                ErrorKind::InvalidDateFormat,
                format!("Field '{}' must be a date in YYYY-MM-DD format", field),
            ),
        }
        .with_context(format!("format: {}", format))
    }

    /// Value is not one of the allowed values.
    pub fn not_allowed(field: &str) -> Self {
        Self::new(
            field,
            ErrorKind::InvalidFieldValue,
            format!("Field '{}' must be one of the allowed values", field),
        )
    }

    /// Value does not match the field pattern.
    pub fn pattern_mismatch(field: &str, pattern: &str) -> Self {
        Self::new(
            field,
            ErrorKind::InvalidFieldValue,
            format!("Field '{}' does not match the required pattern", field),
        )
        .with_context(format!("pattern: {}", pattern))
    }

    /// Number below the minimum.
    pub fn below_minimum(field: &str, min: &Bound) -> Self {
        Self::new(
            field,
            ErrorKind::ValueOutOfRange,
            format!("Field '{}' must be at least {}", field, min),
        )
        .with_context(format!("minimum: {}", min))
    }

    /// Number above the maximum.
    pub fn above_maximum(field: &str, max: &Bound) -> Self {
        Self::new(
            field,
            ErrorKind::ValueOutOfRange,
            format!("Field '{}' must be at most {}", field, max),
        )
        .with_context(format!("maximum: {}", max))
    }

    /// Returns true for document-level errors.
    pub fn is_root(&self) -> bool {
        self.field == ROOT_FIELD
    }
}
