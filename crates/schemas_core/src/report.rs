//! Validation report returned to service and controller layers.

use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// Outcome of validating one document against a named schema.
///
/// Serializes as `{"valid": bool, "schema": name, "errors": [...]}`, the
/// shape request handlers put straight into an error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the document was accepted
    pub valid: bool,

    /// Name of the schema the document was checked against
    pub schema: String,

    /// Violations, in evaluation order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Creates a report; `valid` is derived from `errors`.
    pub fn new(schema: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            schema: schema.into(),
            errors,
        }
    }

    /// Creates a passing report.
    pub fn success(schema: impl Into<String>) -> Self {
        Self::new(schema, Vec::new())
    }

    /// Number of violations.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Compact JSON rendering.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a report back from its JSON rendering.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bound, ErrorKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_report() {
        let report = ValidationReport::success("create_user");

        assert!(report.valid);
        assert_eq!(report.error_count(), 0);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "valid": true, "schema": "create_user", "errors": [] })
        );
    }

    #[test]
    fn test_failure_report_shape() {
        let report = ValidationReport::new(
            "create_user",
            vec![
                ValidationError::missing("email"),
                ValidationError::below_minimum("age", &Bound::Int(18)),
            ],
        );

        assert!(!report.valid);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["schema"], "create_user");
        assert_eq!(value["errors"].as_array().unwrap().len(), 2);
        assert_eq!(value["errors"][0]["code"], "MISSING_REQUIRED_FIELD");
        assert!(value["errors"][0].get("context").is_none());
        assert_eq!(value["errors"][1]["context"], "minimum: 18");
    }

    #[test]
    fn test_report_reads_back() {
        let report = ValidationReport::new(
            "update_order",
            vec![ValidationError::not_allowed("status")],
        );

        let parsed = ValidationReport::from_json(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.errors[0].kind, ErrorKind::InvalidFieldValue);
    }

    #[test]
    fn test_report_errors_match_error_serialization() {
        let error = ValidationError::too_long("name", 100);
        let report = ValidationReport::new("create_user", vec![error.clone()]);

        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["errors"][0], serde_json::to_value(&error).unwrap());
        assert_eq!(value["errors"][0]["code"], "FIELD_TOO_LONG");
        assert_eq!(value["errors"][0]["context"], "maxLength: 100");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ValidationReport::from_json("{not json").is_err());
    }
}
