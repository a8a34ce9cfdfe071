use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the schemacheck binary
// TODO: Migrate to cargo::cargo_bin_cmd! macro when available
// See: https://github.com/assert-rs/assert_cmd/issues/139
#[allow(deprecated)]
fn schemacheck() -> Command {
    let mut cmd = Command::cargo_bin("schemacheck").expect("Failed to find schemacheck binary");
    cmd.env_remove("SCHEMAS_DIR").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout must be a JSON document")
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_valid_user_file() {
    schemacheck()
        .arg("validate")
        .arg("create_user")
        .arg("--file")
        .arg(fixture_path("valid_user.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("create_user"))
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_invalid_user_exits_one() {
    schemacheck()
        .arg("validate")
        .arg("create_user")
        .arg("--file")
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("must be a valid email address"))
        .stdout(predicate::str::contains("FIELD_TOO_SHORT"));
}

#[test]
fn test_validate_inline_data() {
    schemacheck()
        .arg("validate")
        .arg("create_order")
        .arg("--data")
        .arg(r#"{"user_id":1,"product_name":"Desk","quantity":1,"price":120}"#)
        .assert()
        .success();
}

#[test]
fn test_validate_from_stdin() {
    schemacheck()
        .arg("validate")
        .arg("create_order")
        .write_stdin(fs::read_to_string(fixture_path("valid_order.json")).unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_json_output() {
    let output = schemacheck()
        .arg("validate")
        .arg("create_user")
        .arg("--format")
        .arg("json")
        .arg("--file")
        .arg(fixture_path("invalid_user.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    assert_eq!(report["schema"], "create_user");

    let errors = report["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "email");
    assert_eq!(errors[0]["code"], "INVALID_EMAIL_FORMAT");
    assert_eq!(errors[1]["field"], "name");
    assert_eq!(errors[1]["context"], "minLength: 2");
}

#[test]
fn test_validate_json_output_passing() {
    let output = schemacheck()
        .args(["validate", "create_user", "--format", "json", "--file"])
        .arg(fixture_path("valid_user.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["valid"], true);
    assert_eq!(report["errors"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn test_validate_malformed_document() {
    let output = schemacheck()
        .args(["validate", "create_user", "--format", "json", "--file"])
        .arg(fixture_path("malformed.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    let errors = report["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "root");
    assert!(
        errors[0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON format")
    );
}

#[test]
fn test_validate_schema_file_path() {
    schemacheck()
        .arg("validate")
        .arg(fixture_path("untyped_required.schema.json"))
        .arg("--data")
        .arg(r#"{"name":"John"}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("untyped_required"))
        .stdout(predicate::str::contains("Required field 'token' is missing"));
}

#[test]
fn test_validate_unknown_schema() {
    schemacheck()
        .arg("validate")
        .arg("delete_user")
        .arg("--data")
        .arg("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("Unknown schema 'delete_user'"));
}

#[test]
fn test_validate_broken_schema_file() {
    schemacheck()
        .arg("validate")
        .arg(fixture_path("broken.schema.json"))
        .arg("--data")
        .arg("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_validate_missing_document_file() {
    schemacheck()
        .arg("validate")
        .arg("create_user")
        .arg("--file")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[test]
fn test_validate_data_and_file_conflict() {
    schemacheck()
        .arg("validate")
        .arg("create_user")
        .arg("--data")
        .arg("{}")
        .arg("--file")
        .arg(fixture_path("valid_user.json"))
        .assert()
        .failure();
}

// ============================================================================
// schemas directory tests
// ============================================================================

#[test]
fn test_validate_with_schemas_dir() {
    schemacheck()
        .arg("--schemas-dir")
        .arg(fixture_path("schemas"))
        .arg("validate")
        .arg("duty_assignments")
        .arg("--data")
        .arg(r#"{"operator":"TAM","crewCodes":"A001,A002"}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Required field 'startDate' is missing"))
        .stdout(predicate::str::contains("Required field 'endDate' is missing"));
}

#[test]
fn test_schemas_dir_from_env() {
    schemacheck()
        .env("SCHEMAS_DIR", fixture_path("schemas"))
        .arg("validate")
        .arg("product")
        .arg("--data")
        .arg(r#"{"name":"Lamp","category":"books","sku":"ABC-1234"}"#)
        .assert()
        .success();
}

#[test]
fn test_schemas_dir_with_invalid_description() {
    let temp_dir = TempDir::new().unwrap();
    fs::copy(
        fixture_path("broken.schema.json"),
        temp_dir.path().join("broken.schema.json"),
    )
    .unwrap();

    schemacheck()
        .arg("--schemas-dir")
        .arg(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load schemas"));
}

// ============================================================================
// list command tests
// ============================================================================

#[test]
fn test_list_predefined() {
    schemacheck()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("create_user"))
        .stdout(predicate::str::contains("update_user"))
        .stdout(predicate::str::contains("query_user"))
        .stdout(predicate::str::contains("create_order"))
        .stdout(predicate::str::contains("update_order"))
        .stdout(predicate::str::contains("Total: 5"));
}

#[test]
fn test_list_with_schemas_dir() {
    schemacheck()
        .arg("--schemas-dir")
        .arg(fixture_path("schemas"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("duty_assignments"))
        .stdout(predicate::str::contains("product"))
        .stdout(predicate::str::contains("Total: 7"));
}

// ============================================================================
// show command tests
// ============================================================================

#[test]
fn test_show_json() {
    let output = schemacheck()
        .arg("show")
        .arg("create_order")
        .output()
        .unwrap();

    assert!(output.status.success());
    let definition = stdout_json(&output);
    assert_eq!(definition["type"], "object");
    assert_eq!(definition["properties"]["quantity"]["maximum"], 1000);
    assert_eq!(
        definition["required"],
        serde_json::json!(["user_id", "product_name", "quantity", "price"])
    );
}

#[test]
fn test_show_yaml() {
    schemacheck()
        .arg("show")
        .arg("query_user")
        .arg("--format")
        .arg("yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("sortOrder:"))
        .stdout(predicate::str::contains("created_at"));
}

#[test]
fn test_show_reports_issues_on_stderr() {
    schemacheck()
        .arg("show")
        .arg(fixture_path("untyped_required.schema.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"token\""))
        .stderr(predicate::str::contains(
            "Required field 'token' has no rule",
        ));
}

#[test]
fn test_show_output_loads_back() {
    let output = schemacheck()
        .arg("show")
        .arg("create_user")
        .output()
        .unwrap();
    assert!(output.status.success());

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("signup.schema.json"), &output.stdout).unwrap();

    schemacheck()
        .arg("--schemas-dir")
        .arg(temp_dir.path())
        .arg("validate")
        .arg("signup")
        .arg("--file")
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be a valid email address"));
}

#[test]
fn test_help_lists_commands() {
    schemacheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}
