//! Predefined request schemas for the user and order services.

use schemas_core::{
    FieldFormat, FieldSchema, Schema, enum_field, integer_field, integer_field_between,
    number_field, string_field, string_field_between,
};
use schemas_validator::SchemaValidator;

pub const CREATE_USER: &str = "create_user";
pub const UPDATE_USER: &str = "update_user";
pub const QUERY_USER: &str = "query_user";
pub const CREATE_ORDER: &str = "create_order";
pub const UPDATE_ORDER: &str = "update_order";

/// Sort keys accepted by the user query endpoint.
pub const USER_SORT_FIELDS: [&str; 4] = ["id", "name", "email", "created_at"];

/// Lifecycle states of an order.
pub const ORDER_STATUSES: [&str; 5] = [
    "pending",
    "processing",
    "shipped",
    "delivered",
    "cancelled",
];

/// Email address of a user account: format check and at most 255 characters.
fn user_email() -> FieldSchema {
    string_field().format(FieldFormat::Email).max_length(255)
}

/// Schemas for user requests.
pub struct UserSchemas;

impl UserSchemas {
    /// Body of a user creation request: name and email, both required.
    pub fn create() -> Schema {
        Schema::new()
            .add_property("name", string_field_between(2, 100))
            .add_property("email", user_email())
            .add_required_all(["name", "email"])
    }

    /// Body of a user update request; only `id` is required.
    pub fn update() -> Schema {
        Schema::new()
            .add_property("name", string_field_between(2, 100))
            .add_property("email", user_email())
            .add_property("id", integer_field())
            .add_required("id")
    }

    /// Query parameters for listing users.
    pub fn query() -> Schema {
        Schema::new()
            .add_property("page", integer_field().minimum(1))
            .add_property("limit", integer_field_between(1, 100))
            .add_property("search", string_field().max_length(255))
            .add_property("sortBy", enum_field(USER_SORT_FIELDS))
            .add_property("sortOrder", enum_field(["asc", "desc"]))
    }
}

/// Schemas for order requests.
pub struct OrderSchemas;

impl OrderSchemas {
    pub fn create() -> Schema {
        Schema::new()
            .add_property("user_id", integer_field().minimum(1))
            .add_property("product_name", string_field_between(2, 200))
            .add_property("quantity", integer_field_between(1, 1000))
            .add_property("price", number_field().minimum(0))
            .add_required_all(["user_id", "product_name", "quantity", "price"])
    }

    pub fn update() -> Schema {
        Schema::new()
            .add_property("product_name", string_field_between(2, 200))
            .add_property("quantity", integer_field_between(1, 1000))
            .add_property("price", number_field().minimum(0))
            .add_property("status", enum_field(ORDER_STATUSES))
    }
}

/// Ready-made validators for user requests.
pub struct UserValidators;

impl UserValidators {
    pub fn create() -> SchemaValidator {
        SchemaValidator::new(CREATE_USER, UserSchemas::create())
    }

    pub fn update() -> SchemaValidator {
        SchemaValidator::new(UPDATE_USER, UserSchemas::update())
    }

    pub fn query() -> SchemaValidator {
        SchemaValidator::new(QUERY_USER, UserSchemas::query())
    }
}

/// Ready-made validators for order requests.
pub struct OrderValidators;

impl OrderValidators {
    pub fn create() -> SchemaValidator {
        SchemaValidator::new(CREATE_ORDER, OrderSchemas::create())
    }

    pub fn update() -> SchemaValidator {
        SchemaValidator::new(UPDATE_ORDER, OrderSchemas::update())
    }
}

/// All predefined validators.
pub fn predefined_validators() -> Vec<SchemaValidator> {
    vec![
        UserValidators::create(),
        UserValidators::update(),
        UserValidators::query(),
        OrderValidators::create(),
        OrderValidators::update(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemas_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_predefined_schemas_lint_clean() {
        for validator in predefined_validators() {
            assert!(
                validator.schema().lint().is_empty(),
                "{} has lint issues",
                validator.name()
            );
        }
    }

    #[test]
    fn test_validator_names() {
        let names: Vec<String> = predefined_validators()
            .iter()
            .map(|v| v.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![CREATE_USER, UPDATE_USER, QUERY_USER, CREATE_ORDER, UPDATE_ORDER]
        );
    }

    #[test]
    fn test_create_user() {
        let validator = UserValidators::create();
        assert!(
            validator
                .validate(&json!({ "name": "John Doe", "email": "john@example.com" }))
                .is_empty()
        );

        let errors = validator.validate(&json!({ "name": "Jane Doe" }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_user_email_has_no_minimum_length() {
        let errors = UserValidators::create().validate(&json!({ "name": "Ann", "email": "a@b" }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].kind, ErrorKind::InvalidEmailFormat);

        let long = format!("{}@example.com", "a".repeat(250));
        let errors = UserValidators::update().validate(&json!({ "id": 1, "email": long }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::FieldTooLong);
    }

    #[test]
    fn test_update_user_requires_id() {
        let validator = UserValidators::update();

        assert!(validator.validate(&json!({ "id": 42 })).is_empty());

        let errors = validator.validate(&json!({ "name": "John" }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "id");
        assert_eq!(errors[0].kind, ErrorKind::MissingRequiredField);

        let errors = validator.validate(&json!({ "id": "42" }));
        assert_eq!(errors[0].kind, ErrorKind::InvalidFieldType);
    }

    #[test]
    fn test_query_user() {
        let validator = UserValidators::query();

        assert!(validator.validate(&json!({})).is_empty());
        assert!(
            validator
                .validate(&json!({ "page": 2, "limit": 50, "sortBy": "created_at", "sortOrder": "desc" }))
                .is_empty()
        );

        let errors = validator.validate(&json!({ "page": 0, "limit": 101, "sortOrder": "up" }));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["limit", "page", "sortOrder"]);
    }

    #[test]
    fn test_create_order() {
        let validator = OrderValidators::create();
        let order = json!({
            "user_id": 1,
            "product_name": "Keyboard",
            "quantity": 2,
            "price": 49.99
        });
        assert!(validator.validate(&order).is_empty());

        let errors = validator.validate(&json!({
            "user_id": 0,
            "product_name": "K",
            "quantity": 1001,
            "price": -0.01
        }));
        assert!(errors.iter().all(|e| e.kind != ErrorKind::MissingRequiredField));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_update_order_status() {
        let validator = OrderValidators::update();

        assert!(validator.validate(&json!({ "status": "shipped" })).is_empty());

        let errors = validator.validate(&json!({ "status": "lost" }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::InvalidFieldValue);
    }
}
