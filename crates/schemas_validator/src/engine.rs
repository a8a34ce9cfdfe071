//! Main validation engine.
//!
//! This module provides the `SchemaValidator` that binds a [`Schema`] to a
//! name and checks JSON documents against it: document shape first, then
//! required fields, then the type and constraints of every known property.

use crate::ConstraintValidator;
use crate::types::check_type;
use schemas_core::{FieldSchema, FieldType, Schema, ValidationError, ValidationReport};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

/// Named, immutable validator for one schema.
///
/// A `SchemaValidator` is built once (typically at startup) and can be
/// shared across threads: `validate` takes `&self` and keeps no state
/// between calls.
///
/// # Example
///
/// ```rust
/// use schemas_core::{Schema, ErrorKind, email_field, string_field_between};
/// use schemas_validator::SchemaValidator;
///
/// let schema = Schema::new()
///     .add_property("name", string_field_between(2, 100))
///     .add_property("email", email_field())
///     .add_required_all(["name", "email"]);
/// let validator = SchemaValidator::new("create_user", schema);
///
/// let errors = validator.validate_str(r#"{"name": "Jane Doe"}"#);
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field, "email");
/// assert_eq!(errors[0].kind, ErrorKind::MissingRequiredField);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    name: String,
    schema: Schema,
    constraints: ConstraintValidator,
}

impl SchemaValidator {
    /// Creates a validator for `schema`.
    ///
    /// Definition issues (contradictory bounds, invalid patterns, required
    /// fields without a rule) are logged as warnings; they never fail
    /// construction.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();

        for issue in schema.lint() {
            warn!(schema = %name, field = issue.field(), "{}", issue);
        }

        let constraints = ConstraintValidator::for_schema(&schema);
        debug!(
            schema = %name,
            properties = schema.len(),
            required = schema.required().len(),
            "schema validator created"
        );

        Self {
            name,
            schema,
            constraints,
        }
    }

    /// Name used in error reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema this validator checks against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates a parsed JSON document.
    ///
    /// Returns every violation found; an empty list means the document is
    /// accepted. A non-object document yields exactly one `root` error.
    pub fn validate(&self, document: &Value) -> Vec<ValidationError> {
        let Some(object) = document.as_object() else {
            debug!(schema = %self.name, "document is not a JSON object");
            return vec![ValidationError::not_an_object()];
        };

        let mut errors = self.validate_required(object);

        for (name, value) in object {
            if let Some(rule) = self.schema.property(name) {
                errors.extend(self.validate_field(name, rule, value));
            }
        }

        debug!(
            schema = %self.name,
            fields = object.len(),
            errors = errors.len(),
            "document validated"
        );
        errors
    }

    /// Parses and validates a JSON string.
    ///
    /// Malformed JSON yields exactly one `root` error and nothing else is
    /// checked.
    pub fn validate_str(&self, json: &str) -> Vec<ValidationError> {
        match serde_json::from_str::<Value>(json) {
            Ok(document) => self.validate(&document),
            Err(e) => {
                debug!(schema = %self.name, error = %e, "document is not valid JSON");
                vec![ValidationError::invalid_json(e)]
            }
        }
    }

    /// Returns true if the document is accepted.
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validate(document).is_empty()
    }

    /// Returns true if the JSON string is accepted.
    pub fn is_valid_str(&self, json: &str) -> bool {
        self.validate_str(json).is_empty()
    }

    /// Wraps errors in a report carrying this validator's name.
    pub fn report(&self, errors: Vec<ValidationError>) -> ValidationReport {
        ValidationReport::new(self.name.clone(), errors)
    }

    /// Validates a document and returns the report.
    pub fn validate_report(&self, document: &Value) -> ValidationReport {
        self.report(self.validate(document))
    }

    /// Renders errors as `{"valid", "schema", "errors": [...]}` compact JSON.
    ///
    /// An empty slice renders a passing report with `"valid": true`.
    pub fn errors_as_json(&self, errors: &[ValidationError]) -> schemas_core::Result<String> {
        self.report(errors.to_vec()).to_json()
    }

    /// Checks presence of required fields, in the order they were added.
    fn validate_required(&self, object: &Map<String, Value>) -> Vec<ValidationError> {
        self.schema
            .required()
            .iter()
            .filter_map(|name| match object.get(name) {
                None => Some(ValidationError::missing(name)),
                Some(Value::Null) => Some(ValidationError::null_required(name)),
                Some(_) => None,
            })
            .collect()
    }

    /// Validates one property value against its rule.
    fn validate_field(&self, name: &str, rule: &FieldSchema, value: &Value) -> Vec<ValidationError> {
        if value.is_null() && !self.schema.is_required(name) {
            trace!(field = name, "null optional field skipped");
            return Vec::new();
        }

        if let Some(err) = check_type(name, rule.field_type, value) {
            return vec![err];
        }

        match (rule.field_type, value) {
            (FieldType::String, Value::String(s)) => {
                self.constraints.validate_string(name, rule, s)
            }
            (FieldType::Integer | FieldType::Number, Value::Number(n)) => {
                self.constraints.validate_number(name, rule, n)
            }
            _ => Vec::new(),
        }
    }
}
