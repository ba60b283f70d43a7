//! Exemplar CLI
//!
//! Generates example fixture files by sampling each known AI coding tool's
//! data directory.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "exemplar")]
#[command(author, version, about = "Generate example files from AI coding tool data directories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one example file per provider
    Generate {
        /// Prefix for generated example files
        #[arg(long, default_value = "local")]
        prefix: String,

        /// Directory the example files are written to
        #[arg(short, long, default_value = "examples")]
        output: String,
    },

    /// List the known providers and their scan configuration
    Providers,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "exemplar_cli=debug,exemplar_core=debug"
        } else {
            "exemplar_cli=info"
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Starting Exemplar CLI");

    let result = match cli.command {
        Commands::Generate { prefix, output } => {
            commands::generate::run(&prefix, Path::new(&output)).await
        }
        Commands::Providers => commands::providers::run().await.map(|()| true),
    };

    match result {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
