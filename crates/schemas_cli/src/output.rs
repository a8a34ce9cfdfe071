use anyhow::{Context, Result};
use colored::*;
use schemas_sdk::ValidationReport;

pub fn print_validation_report(report: &ValidationReport, format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = report
                .to_json_pretty()
                .context("Failed to serialize validation report")?;
            println!("{}", json);
        }
        _ => print_text_report(report),
    }
    Ok(())
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{} {}", "  VALIDATION REPORT:".bold(), report.schema.bold());
    println!("{}", "═".repeat(60));

    if report.valid {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!(
                "  {}. {} {}",
                i + 1,
                error.to_string().red(),
                format!("[{}]", error.kind.code()).dimmed()
            );
            if let Some(context) = &error.context {
                println!("     {}", context.dimmed());
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total errors: {}", report.error_count());
    println!("{}", "═".repeat(60));
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}
