//! Folio CLI - Markdown document processor.
//!
//! Provides commands for:
//! - `render`: Render markdown files to JSON documents (meta, html, outline)
//! - `text`: Print the search tokens of a markdown file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, TextArgs};
use output::Diagnostics;

/// Folio - Markdown document processor.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown files to JSON.
    Render(RenderArgs),
    /// Print plain-text tokens, one per line.
    Text(TextArgs),
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Text(args) => args.execute(),
    };

    if let Err(err) = result {
        Diagnostics::stderr().failure(&err);
        std::process::exit(1);
    }
}
