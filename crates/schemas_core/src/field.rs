//! Field rule types.
//!
//! This module contains the types describing how a single scalar field of a
//! JSON object is validated: its type, an optional string format, and the
//! length, range, enum and pattern constraints that refine it.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::cmp::Ordering;
use std::fmt;

/// Scalar JSON type a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// JSON string
    String,
    /// JSON integer (a number with no fractional representation)
    Integer,
    /// Any JSON number, integer or floating
    Number,
    /// JSON `true` / `false`
    Boolean,
}

impl FieldType {
    /// Returns the lowercase keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    /// Returns the type name with its indefinite article ("a string", "an integer").
    pub fn with_article(&self) -> &'static str {
        match self {
            FieldType::String => "a string",
            FieldType::Integer => "an integer",
            FieldType::Number => "a number",
            FieldType::Boolean => "a boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refinement tag for string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    /// `local@domain.tld`
    Email,
    /// `YYYY-MM-DD`, checked syntactically only
    Date,
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFormat::Email => f.write_str("email"),
            FieldFormat::Date => f.write_str("date"),
        }
    }
}

/// An inclusive numeric bound.
///
/// Integer bounds are kept as `i64` so that integer values are compared
/// exactly; floating bounds are compared as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    /// Integer bound
    Int(i64),
    /// Floating point bound
    Float(f64),
}

impl Bound {
    /// Compares a JSON number against this bound.
    ///
    /// Returns the ordering of `value` relative to the bound, or `None` when
    /// the two are not comparable.
    pub fn compare(&self, value: &Number) -> Option<Ordering> {
        match *self {
            Bound::Int(bound) => {
                if let Some(v) = value.as_i64() {
                    Some(v.cmp(&bound))
                } else if value.is_u64() {
                    // Only u64 values above i64::MAX land here
                    Some(Ordering::Greater)
                } else {
                    value.as_f64()?.partial_cmp(&(bound as f64))
                }
            }
            Bound::Float(bound) => value.as_f64()?.partial_cmp(&bound),
        }
    }

    /// Whether this bound is strictly greater than `other`.
    ///
    /// Two integer bounds compare exactly; any float falls back to `f64`.
    pub fn exceeds(&self, other: &Bound) -> bool {
        match (self, other) {
            (Bound::Int(a), Bound::Int(b)) => a > b,
            _ => self.as_f64() > other.as_f64(),
        }
    }

    /// Returns the bound as a float.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Bound::Int(v) => v as f64,
            Bound::Float(v) => v,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(v) => write!(f, "{}", v),
            Bound::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Bound {
    fn from(v: i64) -> Self {
        Bound::Int(v)
    }
}

impl From<i32> for Bound {
    fn from(v: i32) -> Self {
        Bound::Int(v.into())
    }
}

impl From<f64> for Bound {
    fn from(v: f64) -> Self {
        Bound::Float(v)
    }
}

/// Validation rule for one field.
///
/// Serializes with the JSON-Schema keyword names (`type`, `minLength`,
/// `enum`, ...) so that a rule reads the same in code and in a schema
/// description file.
///
/// Constraints that do not apply to the field's type are ignored during
/// validation: a `min_length` on an integer field never fires.
///
/// # Example
///
/// ```rust
/// use schemas_core::{FieldSchema, FieldType};
///
/// let name = FieldSchema::new(FieldType::String)
///     .length(2, 100)
///     .description("User's full name");
///
/// assert_eq!(name.min_length, Some(2));
/// assert_eq!(name.max_length, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Expected JSON type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Optional string format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,

    /// Minimum string length in characters (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length in characters (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Minimum numeric value (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Bound>,

    /// Maximum numeric value (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Bound>,

    /// Allowed string values; empty means unconstrained
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Regular expression the whole string must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Human-readable description, never evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSchema {
    /// Creates an unconstrained rule for the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            format: None,
            min_length: None,
            max_length: None,
            minimum: None,
            maximum: None,
            enum_values: Vec::new(),
            pattern: None,
            description: None,
        }
    }

    /// Sets the string format.
    pub fn format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the minimum string length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum string length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets both string length bounds.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Sets the minimum numeric value.
    pub fn minimum(mut self, min: impl Into<Bound>) -> Self {
        self.minimum = Some(min.into());
        self
    }

    /// Sets the maximum numeric value.
    pub fn maximum(mut self, max: impl Into<Bound>) -> Self {
        self.maximum = Some(max.into());
        self
    }

    /// Sets both numeric bounds.
    pub fn range(self, min: impl Into<Bound>, max: impl Into<Bound>) -> Self {
        self.minimum(min).maximum(max)
    }

    /// Restricts the value to a set of allowed strings.
    pub fn allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the regular expression the value must fully match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
