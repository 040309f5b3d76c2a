//! CLI output implementations
//!
//! Formatting of descriptions for the terminal (colors, table rows) and the
//! printer that writes lookups to standard output in the configured format.

pub mod formatter;
pub mod printer;

pub use formatter::ResultFormatter;
pub use printer::Printer;
