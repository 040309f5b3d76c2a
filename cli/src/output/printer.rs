//! Writes interpretations and tables in the configured output format

use super::formatter::ResultFormatter;
use anyhow::{Context, Result};
use codepeek_core::{
    control, standard_table, DescriptionRecord, Interpretation, OutputFormat, Settings,
};
use std::io::Write;
use tracing::debug;

/// Output sink for lookups
pub struct Printer<W: Write> {
    writer: W,
    format: OutputFormat,
    formatter: ResultFormatter,
    /// Whether a text panel has been written yet (panels are blank-line separated)
    wrote_panel: bool,
}

impl<W: Write> Printer<W> {
    /// Create a printer for the given settings
    pub fn new(writer: W, settings: &Settings) -> Self {
        Self {
            writer,
            format: settings.format,
            formatter: ResultFormatter::new(settings.color),
            wrote_panel: false,
        }
    }

    /// Write one interpretation, returning whether it had a result
    ///
    /// Text mode writes nothing for a missing result; JSON mode writes `null`
    /// so that every query maps to exactly one output line.
    pub fn write_interpretation(&mut self, interpretation: &Interpretation) -> Result<bool> {
        match (interpretation, self.format) {
            (Interpretation::Described(description), OutputFormat::Text) => {
                if self.wrote_panel {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "{}", self.formatter.format_panel(description))?;
                self.wrote_panel = true;
            }
            (Interpretation::Described(description), OutputFormat::Json) => {
                writeln!(self.writer, "{}", description.to_json()?)?;
            }
            (Interpretation::NoResult(reason), OutputFormat::Text) => {
                debug!("No result: {}", reason);
            }
            (Interpretation::NoResult(reason), OutputFormat::Json) => {
                debug!("No result: {}", reason);
                writeln!(self.writer, "null")?;
            }
        }

        Ok(!interpretation.is_no_result())
    }

    /// Write the standard ASCII table
    pub fn write_table(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{}", self.formatter.format_table_header())?;
                for description in standard_table() {
                    writeln!(self.writer, "{}", self.formatter.format_table_row(&description))?;
                }
            }
            OutputFormat::Json => {
                let records: Vec<DescriptionRecord> =
                    standard_table().map(|description| description.to_record()).collect();
                let json = serde_json::to_string(&records).context("Failed to serialize table")?;
                writeln!(self.writer, "{}", json)?;
            }
        }
        Ok(())
    }

    /// Write only the control character entries
    pub fn write_controls(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for entry in control::all() {
                    writeln!(self.writer, "{}", self.formatter.format_control_row(entry))?;
                }
            }
            OutputFormat::Json => {
                let entries: Vec<_> = control::all().collect();
                let json =
                    serde_json::to_string(&entries).context("Failed to serialize controls")?;
                writeln!(self.writer, "{}", json)?;
            }
        }
        Ok(())
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
