//! parsemd CLI - Markdown to HTML converter.
//!
//! Provides commands for:
//! - `parse`: Print a markdown file as-is
//! - `convert`: Convert a markdown file to HTML with plugins applied

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, ParseArgs};
use output::Output;

/// parsemd - Markdown to HTML converter.
#[derive(Parser)]
#[command(name = "parsemd", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover parsemd.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and display a markdown file.
    #[command(visible_alias = "p")]
    Parse(ParseArgs),
    /// Convert a markdown file to HTML.
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Convert(args) => args.execute(cli.config.as_deref()),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
