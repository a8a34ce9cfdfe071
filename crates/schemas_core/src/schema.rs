//! Object schema: named field rules plus the required-field set.

use crate::{Bound, FieldSchema, SchemaError, compile_pattern};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Shape description for one JSON object.
///
/// A `Schema` maps field names to [`FieldSchema`] rules and lists the fields
/// that must be present and non-null. It is built once with the fluent
/// methods and then handed to a validator.
///
/// Required names do not have to appear in `properties`; such a field is
/// only checked for presence.
///
/// # Example
///
/// ```rust
/// use schemas_core::{Schema, date_field, string_field};
///
/// let schema = Schema::new()
///     .add_property("operator", string_field())
///     .add_property("startDate", date_field())
///     .add_property("endDate", date_field())
///     .add_required("startDate")
///     .add_required("endDate");
///
/// assert!(schema.is_required("startDate"));
/// assert!(!schema.is_required("operator"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    properties: BTreeMap<String, FieldSchema>,

    #[serde(default, deserialize_with = "deserialize_required")]
    required: Vec<String>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `name`.
    pub fn add_property(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        self.properties.insert(name.into(), field);
        self
    }

    /// Marks `name` as required. Adding the same name twice has no effect.
    pub fn add_required(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }

    /// Marks every name in `names` as required.
    pub fn add_required_all<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |schema, name| schema.add_required(name))
    }

    /// Returns the rule for `name`, if any.
    pub fn property(&self, name: &str) -> Option<&FieldSchema> {
        self.properties.get(name)
    }

    /// Returns all field rules, ordered by name.
    pub fn properties(&self) -> &BTreeMap<String, FieldSchema> {
        &self.properties
    }

    /// Returns the required field names in the order they were added.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Returns true if `name` is required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Number of field rules.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the schema has no field rules.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Checks the definition for rules that can never behave as intended.
    ///
    /// Returns an empty list for a well-formed schema. Issues never prevent
    /// validation: a contradictory range simply rejects every value.
    pub fn lint(&self) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();

        for (name, field) in &self.properties {
            if let (Some(min), Some(max)) = (field.min_length, field.max_length) {
                if min > max {
                    issues.push(SchemaIssue::ContradictoryLength {
                        field: name.clone(),
                        min,
                        max,
                    });
                }
            }

            if let (Some(min), Some(max)) = (field.minimum, field.maximum) {
                if min.exceeds(&max) {
                    issues.push(SchemaIssue::ContradictoryRange {
                        field: name.clone(),
                        min,
                        max,
                    });
                }
            }

            if let Some(pattern) = &field.pattern {
                if let Err(e) = compile_pattern(pattern) {
                    issues.push(SchemaIssue::InvalidPattern {
                        field: name.clone(),
                        pattern: pattern.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        for name in &self.required {
            if !self.properties.contains_key(name) {
                issues.push(SchemaIssue::UntypedRequired {
                    field: name.clone(),
                });
            }
        }

        issues
    }

    /// Fails if [`lint`](Self::lint) reports any fatal issue.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        let fatal: Vec<String> = self
            .lint()
            .iter()
            .filter(|issue| issue.is_fatal())
            .map(|issue| issue.to_string())
            .collect();

        if fatal.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::InvalidDefinition(fatal.join("; ")))
        }
    }
}

/// A problem found in a schema definition.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    /// Required field without a rule; only its presence is checked
    UntypedRequired { field: String },

    /// `minLength` greater than `maxLength`
    ContradictoryLength {
        field: String,
        min: usize,
        max: usize,
    },

    /// `minimum` greater than `maximum`
    ContradictoryRange { field: String, min: Bound, max: Bound },

    /// Pattern that does not compile; it never matches
    InvalidPattern {
        field: String,
        pattern: String,
        error: String,
    },
}

impl SchemaIssue {
    /// Field the issue refers to.
    pub fn field(&self) -> &str {
        match self {
            SchemaIssue::UntypedRequired { field }
            | SchemaIssue::ContradictoryLength { field, .. }
            | SchemaIssue::ContradictoryRange { field, .. }
            | SchemaIssue::InvalidPattern { field, .. } => field,
        }
    }

    /// Returns true if the issue makes the field reject every value.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SchemaIssue::UntypedRequired { .. })
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::UntypedRequired { field } => write!(
                f,
                "Required field '{}' has no rule; only presence is checked",
                field
            ),
            SchemaIssue::ContradictoryLength { field, min, max } => write!(
                f,
                "Field '{}' has minLength {} greater than maxLength {}",
                field, min, max
            ),
            SchemaIssue::ContradictoryRange { field, min, max } => write!(
                f,
                "Field '{}' has minimum {} greater than maximum {}",
                field, min, max
            ),
            SchemaIssue::InvalidPattern {
                field,
                pattern,
                error,
            } => write!(
                f,
                "Field '{}' has invalid pattern '{}': {}",
                field, pattern, error
            ),
        }
    }
}

fn deserialize_required<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    let mut required = Vec::with_capacity(names.len());
    for name in names {
        if !required.contains(&name) {
            required.push(name);
        }
    }
    Ok(required)
}
