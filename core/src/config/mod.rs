//! Minimal configuration module for codepeek core
//!
//! Only exports pure data types. All discovery and loading is in the CLI layer.

pub mod types;

pub use types::{OutputFormat, Settings};
