//! # codepeek CLI
//!
//! Describe a character or hexadecimal value as decimal, hex, binary and an
//! ASCII label.
//!
//! ## Usage
//!
//! - `codepeek` - Start live mode (result updates on every keystroke)
//! - `codepeek A` / `codepeek 0x41` - Describe a single value
//! - `codepeek --stdin` - Describe one value per input line
//! - `codepeek table` - Print the standard ASCII table

use anyhow::Result;
use clap::{Parser, Subcommand};
use codepeek_core::OutputFormat;
use std::io::IsTerminal;
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{batch_command, live_command, lookup_command, table_command};
use config::CliConfigLoader;

/// codepeek - character and hex value lookup
#[derive(Parser)]
#[command(name = "codepeek")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Describe a character or hex value as decimal, hex, binary and ASCII")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Read one query per line from standard input
    #[arg(long)]
    stdin: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// A single character or a 0x-prefixed hex value
    input: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the standard ASCII table
    Table {
        /// Only list the control characters
        #[arg(long)]
        controls: bool,
    },

    /// Interactive lookup that updates on every keystroke
    Live,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    // Colors only make sense on a terminal
    let no_color = cli.no_color || !std::io::stdout().is_terminal();
    let mut loader = CliConfigLoader::new().with_no_color(no_color);

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(format) = cli.format {
        loader = loader.with_format_override(format);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    codepeek_core::init_tracing_with_debug(cli.verbose);

    // Build configuration loader
    let settings = build_config_loader(&cli).load().await?;

    match (cli.input, cli.command) {
        // If an input is provided, describe it and report a miss via the exit code
        (Some(input), None) => {
            if !lookup_command(input, settings).await? {
                std::process::exit(1);
            }
            Ok(())
        }
        // If an input is provided with a subcommand, that's an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both an input and a subcommand");
            std::process::exit(2);
        }
        (None, Some(Commands::Table { controls })) => table_command(settings, controls).await,
        (None, Some(Commands::Live)) => live_command(settings).await,
        // Piped input without an argument is treated as a batch
        (None, None) if cli.stdin || !std::io::stdin().is_terminal() => {
            batch_command(settings).await.map(|_| ())
        }
        // Default to live mode
        (None, None) => live_command(settings).await,
    }
}
