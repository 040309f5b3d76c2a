//! One-shot and batch lookup commands

use crate::output::Printer;
use anyhow::{Context, Result};
use codepeek_core::{interpret, Settings};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Describe a single input; returns whether it had a result
pub async fn lookup_command(input: String, settings: Settings) -> Result<bool> {
    debug!("Looking up {:?}", input);

    let interpretation = interpret(&input);
    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock(), &settings);
    let found = printer.write_interpretation(&interpretation)?;
    printer.finish()?;

    Ok(found)
}

/// Describe every line read from standard input; returns the number of results
pub async fn batch_command(settings: Settings) -> Result<usize> {
    info!("Reading queries from standard input");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock(), &settings);
    let mut queries = 0usize;
    let mut found = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from standard input")?
    {
        queries += 1;
        if printer.write_interpretation(&interpret(&line))? {
            found += 1;
        }
    }
    printer.finish()?;

    debug!("Described {} of {} queries", found, queries);
    Ok(found)
}
