use anyhow::Result;
use schemas_sdk::SchemaRegistry;
use serde_json::json;

use super::resolve_validator;
use crate::output;

pub fn execute(registry: &SchemaRegistry, schema: &str, format: &str) -> Result<()> {
    let validator = resolve_validator(registry, schema)?;
    let schema = validator.schema();

    // Printed as a description that loads back through --schemas-dir
    let definition = json!({
        "type": "object",
        "title": validator.name(),
        "properties": schema.properties(),
        "required": schema.required(),
    });

    match format {
        "yaml" => print!("{}", serde_yaml_ng::to_string(&definition)?),
        _ => println!("{}", serde_json::to_string_pretty(&definition)?),
    }

    // Issues go to stderr so the definition stays machine-readable
    for issue in schema.lint() {
        output::print_warning(&issue.to_string());
    }

    Ok(())
}
