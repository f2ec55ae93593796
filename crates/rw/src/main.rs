//! RW CLI - Documentation page components.
//!
//! Provides commands for:
//! - `render`: Render a component invocation to an HTML fragment
//! - `list`: List the available components

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ListArgs, RenderArgs};
use output::Output;

/// RW - Documentation page components.
#[derive(Parser)]
#[command(name = "rw", version, about)]
struct Cli {
    /// Enable verbose output (show rendering logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a component to an HTML fragment on stdout.
    Render(RenderArgs),
    /// List available components.
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::List(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
