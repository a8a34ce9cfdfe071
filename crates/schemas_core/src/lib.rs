//! # Request Schemas Core
//!
//! Core data structures and types for the Request Schemas engine.
//!
//! This crate provides the building blocks for describing the acceptable shape
//! of a JSON request body. A schema is a flat map of field names to field rules
//! plus a set of required fields; the `schemas_validator` crate evaluates
//! documents against it.
//!
//! ## Key Concepts
//!
//! - **FieldSchema**: The rule for one field (type, format, length/range bounds, enum, pattern)
//! - **Schema**: Field rules by name plus the required-field set
//! - **ValidationError**: One violation, with a field path, an [`ErrorKind`] code and a message
//! - **ValidationReport**: The `{valid, schema, errors}` report handed to request handlers
//!
//! ## Example
//!
//! ```rust
//! use schemas_core::{Schema, email_field, integer_field_between, string_field_between};
//!
//! let schema = Schema::new()
//!     .add_property("name", string_field_between(2, 100))
//!     .add_property("email", email_field())
//!     .add_property("age", integer_field_between(18, 120))
//!     .add_required("name")
//!     .add_required("email");
//!
//! assert_eq!(schema.required().len(), 2);
//! assert!(schema.lint().is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod pattern;
pub mod report;
pub mod schema;

pub use builder::*;
pub use error::*;
pub use field::*;
pub use pattern::*;
pub use report::*;
pub use schema::*;
