//! Constraint validation logic.
//!
//! This module handles the constraints that refine a field once its type
//! matched:
//! - Length: `minLength` / `maxLength` on strings, counted in characters
//! - Format: `email` and `date` strings
//! - Enum: string must be one of the allowed values
//! - Pattern: string must fully match a regex
//! - Range: `minimum` / `maximum` on integers and numbers
//!
//! Every applicable constraint is evaluated and every failure reported.

use regex::Regex;
use schemas_core::{FieldSchema, Schema, ValidationError, compile_pattern};
use serde_json::Number;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::trace;

use crate::formats::matches_format;

/// Evaluates field constraints.
///
/// Patterns are compiled once, up front, so a validator can be shared
/// across threads without locking. A pattern that fails to compile is kept
/// as `None` and never matches.
#[derive(Debug, Clone, Default)]
pub struct ConstraintValidator {
    /// Compiled patterns keyed by source
    patterns: HashMap<String, Option<Regex>>,
}

impl ConstraintValidator {
    /// Creates a constraint validator with no compiled patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constraint validator with every pattern of `schema` compiled.
    pub fn for_schema(schema: &Schema) -> Self {
        let mut validator = Self::new();
        for field in schema.properties().values() {
            if let Some(pattern) = &field.pattern {
                validator.compile(pattern);
            }
        }
        validator
    }

    /// Compiles and caches a pattern.
    fn compile(&mut self, pattern: &str) {
        if !self.patterns.contains_key(pattern) {
            self.patterns
                .insert(pattern.to_string(), compile_pattern(pattern).ok());
        }
    }

    /// Number of cached patterns, including ones that failed to compile.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Validates a string value against the string constraints of `rule`.
    pub fn validate_string(
        &self,
        field: &str,
        rule: &FieldSchema,
        value: &str,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let length = value.chars().count();

        if let Some(min) = rule.min_length {
            if length < min {
                errors.push(ValidationError::too_short(field, min));
            }
        }

        if let Some(max) = rule.max_length {
            if length > max {
                errors.push(ValidationError::too_long(field, max));
            }
        }

        if let Some(format) = rule.format {
            if !matches_format(format, value) {
                errors.push(ValidationError::invalid_format(field, format));
            }
        }

        if !rule.enum_values.is_empty() && !rule.enum_values.iter().any(|v| v == value) {
            errors.push(ValidationError::not_allowed(field));
        }

        if let Some(pattern) = &rule.pattern {
            if !self.matches_pattern(pattern, value) {
                errors.push(ValidationError::pattern_mismatch(field, pattern));
            }
        }

        trace!(field, length, errors = errors.len(), "string constraints checked");
        errors
    }

    /// Validates a numeric value against `minimum` / `maximum`.
    pub fn validate_number(
        &self,
        field: &str,
        rule: &FieldSchema,
        value: &Number,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(min) = &rule.minimum {
            if min.compare(value) == Some(Ordering::Less) {
                errors.push(ValidationError::below_minimum(field, min));
            }
        }

        if let Some(max) = &rule.maximum {
            if max.compare(value) == Some(Ordering::Greater) {
                errors.push(ValidationError::above_maximum(field, max));
            }
        }

        trace!(field, %value, errors = errors.len(), "range constraints checked");
        errors
    }

    /// Returns true if `value` fully matches `pattern`.
    fn matches_pattern(&self, pattern: &str, value: &str) -> bool {
        match self.patterns.get(pattern) {
            Some(Some(regex)) => regex.is_match(value),
            Some(None) => false,
            // Not precompiled: rule did not come from the schema this
            // validator was built for.
            None => compile_pattern(pattern)
                .map(|regex| regex.is_match(value))
                .unwrap_or(false),
        }
    }
}
