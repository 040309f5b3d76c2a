//! Terminal formatting for descriptions
//!
//! Produces the result panel and the ASCII table rows, optionally colored.

use codepeek_core::{ControlCharacter, Description, Label};

// ANSI color codes
pub const CYAN: &str = "\x1b[96m"; // Field names
pub const GREEN: &str = "\x1b[92m"; // Printable characters
pub const YELLOW: &str = "\x1b[93m"; // Control characters
pub const RED: &str = "\x1b[91m"; // Non-standard characters
pub const GRAY: &str = "\x1b[90m"; // Hints and table headers
pub const RESET: &str = "\x1b[0m";

/// Formatter for descriptions, with or without ANSI colors
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    color: bool,
}

impl ResultFormatter {
    /// Create a new formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn label_color(label: &Label) -> &'static str {
        match label {
            Label::Printable(_) => GREEN,
            Label::Control(_) => YELLOW,
            Label::NonStandard(_) | Label::Surrogate => RED,
        }
    }

    /// Panel lines: decimal, hex, binary, then the label line
    pub fn panel_lines(&self, description: &Description) -> Vec<String> {
        let label = description.label();
        let last = description.fields().len() - 1;

        description
            .fields()
            .iter()
            .enumerate()
            .map(|(index, (name, value))| {
                let value = if index == last {
                    self.paint(Self::label_color(&label), value)
                } else {
                    value.clone()
                };
                format!("{} {}", self.paint(CYAN, &format!("{}:", name)), value)
            })
            .collect()
    }

    /// Full result panel
    pub fn format_panel(&self, description: &Description) -> String {
        self.panel_lines(description).join("\n")
    }

    /// Header line for the ASCII table
    pub fn format_table_header(&self) -> String {
        self.paint(
            GRAY,
            &format!("{:>3}  {:<4}  {:<9}  {}", "Dec", "Hex", "Binary", "Character"),
        )
    }

    /// One row of the ASCII table
    pub fn format_table_row(&self, description: &Description) -> String {
        let label = description.label();
        format!(
            "{:>3}  {:<4}  {:<9}  {}",
            description.decimal(),
            description.hex(),
            description.binary(),
            self.paint(Self::label_color(&label), &label.to_string())
        )
    }

    /// One row of the control character listing
    pub fn format_control_row(&self, control: &ControlCharacter) -> String {
        format!(
            "{:>3}  {:<3}  {}",
            control.code,
            self.paint(YELLOW, control.abbreviation),
            control.name
        )
    }

    /// Dimmed hint text
    pub fn format_hint(&self, text: &str) -> String {
        self.paint(GRAY, text)
    }
}
