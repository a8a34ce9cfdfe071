//! Embedded JSON descriptions of the predefined schemas.
//!
//! These are the documents published to API clients. Each one parses into
//! exactly the schema built by the matching factory in [`crate::catalog`].

use crate::catalog::{CREATE_ORDER, CREATE_USER, QUERY_USER, UPDATE_ORDER, UPDATE_USER};

pub const USER_CREATE_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "title": "Create User Schema",
  "description": "Schema for creating a new user",
  "properties": {
    "name": {
      "type": "string",
      "minLength": 2,
      "maxLength": 100,
      "description": "User's full name"
    },
    "email": {
      "type": "string",
      "format": "email",
      "maxLength": 255,
      "description": "User's email address"
    }
  },
  "required": ["name", "email"],
  "additionalProperties": false
}"#;

pub const USER_UPDATE_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "title": "Update User Schema",
  "description": "Schema for updating an existing user",
  "properties": {
    "name": {
      "type": "string",
      "minLength": 2,
      "maxLength": 100,
      "description": "User's full name"
    },
    "email": {
      "type": "string",
      "format": "email",
      "maxLength": 255,
      "description": "User's email address"
    },
    "id": {
      "type": "integer",
      "description": "User ID"
    }
  },
  "required": ["id"],
  "additionalProperties": false
}"#;

pub const USER_QUERY_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "title": "User Query Schema",
  "description": "Schema for user query parameters",
  "properties": {
    "page": {
      "type": "integer",
      "minimum": 1,
      "default": 1
    },
    "limit": {
      "type": "integer",
      "minimum": 1,
      "maximum": 100,
      "default": 10
    },
    "search": {
      "type": "string",
      "maxLength": 255
    },
    "sortBy": {
      "type": "string",
      "enum": ["id", "name", "email", "created_at"],
      "default": "id"
    },
    "sortOrder": {
      "type": "string",
      "enum": ["asc", "desc"],
      "default": "asc"
    }
  },
  "additionalProperties": false
}"#;

pub const ORDER_CREATE_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "title": "Create Order Schema",
  "description": "Schema for creating a new order",
  "properties": {
    "user_id": {
      "type": "integer",
      "minimum": 1
    },
    "product_name": {
      "type": "string",
      "minLength": 2,
      "maxLength": 200
    },
    "quantity": {
      "type": "integer",
      "minimum": 1,
      "maximum": 1000
    },
    "price": {
      "type": "number",
      "minimum": 0,
      "multipleOf": 0.01
    }
  },
  "required": ["user_id", "product_name", "quantity", "price"],
  "additionalProperties": false
}"#;

pub const ORDER_UPDATE_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "title": "Update Order Schema",
  "description": "Schema for updating an existing order",
  "properties": {
    "product_name": {
      "type": "string",
      "minLength": 2,
      "maxLength": 200
    },
    "quantity": {
      "type": "integer",
      "minimum": 1,
      "maximum": 1000
    },
    "price": {
      "type": "number",
      "minimum": 0,
      "multipleOf": 0.01
    },
    "status": {
      "type": "string",
      "enum": ["pending", "processing", "shipped", "delivered", "cancelled"]
    }
  },
  "additionalProperties": false
}"#;

/// Name and JSON description of every predefined schema.
pub const EMBEDDED: [(&str, &str); 5] = [
    (CREATE_USER, USER_CREATE_SCHEMA),
    (UPDATE_USER, USER_UPDATE_SCHEMA),
    (QUERY_USER, USER_QUERY_SCHEMA),
    (CREATE_ORDER, ORDER_CREATE_SCHEMA),
    (UPDATE_ORDER, ORDER_UPDATE_SCHEMA),
];
