use anyhow::Result;
use colored::*;
use schemas_sdk::SchemaRegistry;

pub fn execute(registry: &SchemaRegistry) -> Result<()> {
    println!("{}", "Registered schemas:".bold());

    for validator in registry.iter() {
        let schema = validator.schema();
        println!(
            "  {:<24} {} fields, {} required",
            validator.name().cyan(),
            schema.len(),
            schema.required().len()
        );
    }

    println!("\nTotal: {}", registry.len());
    Ok(())
}
