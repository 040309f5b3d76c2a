//! Live (per-keystroke) lookup mode

pub mod state;
pub mod terminal;

pub use terminal::run_live;
