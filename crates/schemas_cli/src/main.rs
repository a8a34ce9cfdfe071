mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "schemacheck")]
#[command(version, about = "Request Schemas CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory with additional `<name>.schema.{json,yaml,yml,toml}` files
    #[arg(long, global = true, env = "SCHEMAS_DIR")]
    schemas_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON document against a schema
    Validate {
        /// Registered schema name or path to a description file
        schema: String,

        /// JSON document given inline
        #[arg(short, long, conflicts_with = "file")]
        data: Option<String>,

        /// Path to the JSON document (reads stdin when neither is given)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List registered schemas
    List,

    /// Print a schema definition and its issues
    Show {
        /// Registered schema name or path to a description file
        schema: String,

        /// Output format: json, yaml
        #[arg(short, long, default_value = "json", value_parser = ["json", "yaml"])]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    let registry = commands::load_registry(cli.schemas_dir.as_deref())?;

    match cli.command {
        Commands::Validate {
            schema,
            data,
            file,
            format,
        } => commands::validate::execute(&registry, &schema, data, file.as_deref(), &format),

        Commands::List => commands::list::execute(&registry),

        Commands::Show { schema, format } => commands::show::execute(&registry, &schema, &format),
    }
}
