//! Lexic CLI - Catalog validation and static rendering tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog file
//! lexic check crates/storefront/data/catalog.json
//!
//! # Render the initial page for the demo catalog
//! lexic render
//!
//! # Render a catalog file to disk
//! lexic render catalog.json -o preview.html
//! ```
//!
//! # Commands
//!
//! - `check` - Parse a catalog and summarize what the widget would show
//! - `render` - Render the initial storefront page as static HTML
//!
//! Selection policy and collection title are read from the same
//! `STOREFRONT_*` variables as the server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lexic_storefront::config::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "lexic")]
#[command(author, version, about = "Lexic storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file
    Check {
        /// Catalog JSON file
        catalog: PathBuf,
    },
    /// Render the initial storefront page
    Render {
        /// Catalog JSON file (default: bundled demo catalog)
        catalog: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Check { catalog } => {
            let summary = commands::check::run(&catalog, &config.selection)?;
            writeln!(std::io::stdout().lock(), "{summary}")?;
        }
        Commands::Render { catalog, output } => {
            let catalog = catalog.or_else(|| config.catalog_path.clone());
            let html = commands::render::run(catalog.as_deref(), &config)?;
            match output {
                Some(path) => commands::render::write_to(&path, &html)?,
                None => std::io::stdout().lock().write_all(html.as_bytes())?,
            }
        }
    }
    Ok(())
}
