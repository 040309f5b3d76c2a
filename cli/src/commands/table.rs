//! ASCII table listing command

use crate::output::Printer;
use anyhow::Result;
use codepeek_core::Settings;
use tracing::debug;

/// Print the standard ASCII table, or only the control characters
pub async fn table_command(settings: Settings, controls_only: bool) -> Result<()> {
    debug!(controls_only, "Printing table");

    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock(), &settings);
    if controls_only {
        printer.write_controls()?;
    } else {
        printer.write_table()?;
    }
    printer.finish()?;

    Ok(())
}
