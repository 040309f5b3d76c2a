//! Live mode command

use crate::interactive::run_live;
use anyhow::{anyhow, Context, Result};
use codepeek_core::Settings;
use std::io::IsTerminal;
use tracing::debug;

/// Start live mode
pub async fn live_command(settings: Settings) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return Err(anyhow!(
            "Live mode needs a terminal; pass an input argument or use --stdin instead"
        ));
    }

    debug!("Starting live mode");

    // The crossterm event loop blocks, so keep it off the async workers
    tokio::task::spawn_blocking(move || run_live(&settings))
        .await
        .context("Live mode stopped unexpectedly")?
}
