//! # Request Schemas Validator
//!
//! Validation engine for request schemas. This crate checks JSON documents
//! against a [`schemas_core::Schema`]:
//!
//! - Document validation (valid JSON, top level is an object)
//! - Required fields (present and non-null)
//! - Type checking (string, integer, number, boolean)
//! - Constraint validation (length, email/date format, enum, pattern, range)
//!
//! Violations are returned as data; malformed input never panics or errors.
//!
//! ## Example
//!
//! ```rust
//! use schemas_core::{Schema, integer_field_between};
//! use schemas_validator::SchemaValidator;
//! use serde_json::json;
//!
//! # fn main() -> schemas_core::Result<()> {
//! let schema = Schema::new().add_property("age", integer_field_between(18, 120));
//! let validator = SchemaValidator::new("adult", schema);
//!
//! assert!(validator.is_valid(&json!({ "age": 30 })));
//!
//! let errors = validator.validate(&json!({ "age": 15 }));
//! if !errors.is_empty() {
//!     println!("{}", validator.errors_as_json(&errors)?);
//! }
//! # Ok(())
//! # }
//! ```

mod constraints;
mod engine;
mod formats;
mod types;

pub use constraints::*;
pub use engine::*;
pub use formats::*;
pub use types::*;
