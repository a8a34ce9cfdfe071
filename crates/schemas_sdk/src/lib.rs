//! # Request Schemas SDK
//!
//! Public API for request schema validation. Re-exports the model, parser
//! and engine, and adds:
//!
//! - Predefined schemas and validators for the user and order services
//! - A [`SchemaRegistry`] that holds named validators built once at startup
//! - [`compile`] / [`compile_file`] to build a validator from a description
//!
//! ## Example
//!
//! ```rust
//! use schemas_sdk::{SchemaRegistry, UserValidators};
//! use serde_json::json;
//!
//! let validator = UserValidators::create();
//! let errors = validator.validate(&json!({ "name": "Jane Doe" }));
//! assert_eq!(errors[0].field, "email");
//!
//! let registry = SchemaRegistry::with_defaults();
//! let errors = registry
//!     .validate("create_order", &json!({ "user_id": 1, "product_name": "Desk", "quantity": 1, "price": 120.0 }))
//!     .expect("create_order is registered");
//! assert!(errors.is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod descriptions;
pub mod error;
pub mod registry;

pub use catalog::{
    CREATE_ORDER, CREATE_USER, OrderSchemas, OrderValidators, QUERY_USER, UPDATE_ORDER,
    UPDATE_USER, UserSchemas, UserValidators, predefined_validators,
};
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{SchemaRegistry, compile, compile_file};

pub use schemas_core::*;
pub use schemas_parser::{ParserError, SchemaDescription, SchemaFormat, detect_format};
pub use schemas_validator::SchemaValidator;
