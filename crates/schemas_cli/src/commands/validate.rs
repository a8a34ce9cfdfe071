use anyhow::{Context, Result};
use schemas_sdk::SchemaRegistry;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::resolve_validator;
use crate::output;

pub fn execute(
    registry: &SchemaRegistry,
    schema: &str,
    data: Option<String>,
    file: Option<&Path>,
    format: &str,
) -> Result<()> {
    let validator = resolve_validator(registry, schema)?;
    info!("Validating against schema: {}", validator.name());

    let input = read_document(data, file)?;
    let errors = validator.validate_str(&input);
    let report = validator.report(errors);

    output::print_validation_report(&report, format)?;

    if !report.valid {
        std::process::exit(1);
    }

    Ok(())
}

/// Inline data wins, then the file, then stdin.
fn read_document(data: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(data) = data {
        return Ok(data);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read document from stdin")?;
    Ok(input)
}
