//! Field builder functions.
//!
//! Shorthand constructors for the field rules request schemas use most. Each
//! returns a complete [`FieldSchema`] that can be refined further with its
//! chainable setters.
//!
//! ```rust
//! use schemas_core::{Schema, email_field, integer_field_between, string_field_between};
//!
//! let schema = Schema::new()
//!     .add_property("name", string_field_between(2, 100))
//!     .add_property("email", email_field())
//!     .add_property("age", integer_field_between(18, 120))
//!     .add_required_all(["name", "email"]);
//!
//! assert_eq!(schema.len(), 3);
//! ```

use crate::{FieldFormat, FieldSchema, FieldType};

/// Minimum length of an email address.
pub const EMAIL_MIN_LENGTH: usize = 5;

/// Maximum length of an email address.
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Unbounded string field.
pub fn string_field() -> FieldSchema {
    FieldSchema::new(FieldType::String)
}

/// String field with inclusive length bounds.
pub fn string_field_between(min: usize, max: usize) -> FieldSchema {
    string_field().length(min, max)
}

/// Email address field, between 5 and 255 characters.
pub fn email_field() -> FieldSchema {
    string_field()
        .format(FieldFormat::Email)
        .length(EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH)
}

/// `YYYY-MM-DD` date field.
pub fn date_field() -> FieldSchema {
    string_field().format(FieldFormat::Date)
}

/// Unbounded integer field.
pub fn integer_field() -> FieldSchema {
    FieldSchema::new(FieldType::Integer)
}

/// Integer field with inclusive bounds.
pub fn integer_field_between(min: i64, max: i64) -> FieldSchema {
    integer_field().range(min, max)
}

/// Unbounded number field.
pub fn number_field() -> FieldSchema {
    FieldSchema::new(FieldType::Number)
}

/// Number field with inclusive bounds.
pub fn number_field_between(min: f64, max: f64) -> FieldSchema {
    number_field().range(min, max)
}

/// Boolean field.
pub fn boolean_field() -> FieldSchema {
    FieldSchema::new(FieldType::Boolean)
}

/// String field restricted to the given values.
pub fn enum_field<I, S>(values: I) -> FieldSchema
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    string_field().allowed_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bound;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_field_unbounded() {
        let field = string_field();

        assert_eq!(field.field_type, FieldType::String);
        assert!(field.min_length.is_none());
        assert!(field.max_length.is_none());
        assert!(field.format.is_none());
        assert!(field.enum_values.is_empty());
    }

    #[test]
    fn test_string_field_between() {
        let field = string_field_between(2, 100);

        assert_eq!(field.min_length, Some(2));
        assert_eq!(field.max_length, Some(100));
    }

    #[test]
    fn test_email_field_defaults() {
        let field = email_field();

        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(field.format, Some(FieldFormat::Email));
        assert_eq!(field.min_length, Some(5));
        assert_eq!(field.max_length, Some(255));
    }

    #[test]
    fn test_date_field() {
        let field = date_field();

        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(field.format, Some(FieldFormat::Date));
        assert!(field.min_length.is_none());
    }

    #[test]
    fn test_integer_field_between() {
        let field = integer_field_between(18, 120);

        assert_eq!(field.field_type, FieldType::Integer);
        assert_eq!(field.minimum, Some(Bound::Int(18)));
        assert_eq!(field.maximum, Some(Bound::Int(120)));
    }

    #[test]
    fn test_integer_field_one_sided() {
        let field = integer_field().minimum(1);

        assert_eq!(field.minimum, Some(Bound::Int(1)));
        assert!(field.maximum.is_none());
    }

    #[test]
    fn test_number_field_between() {
        let field = number_field_between(0.0, 9999.99);

        assert_eq!(field.field_type, FieldType::Number);
        assert_eq!(field.minimum, Some(Bound::Float(0.0)));
        assert_eq!(field.maximum, Some(Bound::Float(9999.99)));
    }

    #[test]
    fn test_boolean_field() {
        assert_eq!(boolean_field().field_type, FieldType::Boolean);
    }

    #[test]
    fn test_enum_field() {
        let field = enum_field(["electronics", "clothing", "books", "food"]);

        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(field.enum_values.len(), 4);
        assert_eq!(field.enum_values[0], "electronics");
    }

    #[test]
    fn test_degenerate_range_accepted() {
        let field = integer_field_between(10, 1);

        assert_eq!(field.minimum, Some(Bound::Int(10)));
        assert_eq!(field.maximum, Some(Bound::Int(1)));
    }

    #[test]
    fn test_refinements_chain() {
        let field = string_field()
            .pattern(r"^[A-Z]{3}$")
            .description("Airline code");

        assert_eq!(field.pattern.as_deref(), Some(r"^[A-Z]{3}$"));
        assert_eq!(field.description.as_deref(), Some("Airline code"));
    }
}
