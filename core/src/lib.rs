//! # codepeek Core
//!
//! Core library for codepeek - describes a single character or hexadecimal
//! value as decimal, hex, binary and an ASCII label.
//!
//! ```
//! use codepeek_core::interpret;
//!
//! let description = interpret("0x41").into_description().unwrap();
//! assert_eq!(description.decimal(), "65");
//! assert_eq!(description.label().to_string(), "'A'");
//! ```

// Core modules
pub mod code_point;
pub mod config;
pub mod control;
pub mod error;
pub mod interpreter;
pub mod report;

// Re-export commonly used types
pub use code_point::{CodePoint, Label, Range};
pub use config::{OutputFormat, Settings};
pub use control::ControlCharacter;
pub use error::{ConfigError, Error, Result};
pub use interpreter::{interpret, Description, Interpretation, NoResultReason};
pub use report::{standard_table, DescriptionRecord};

/// Current version of the codepeek-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with a specific debug mode
///
/// `RUST_LOG` still wins when it is set.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}
