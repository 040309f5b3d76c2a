//! CLI command implementations

pub mod live;
pub mod lookup;
pub mod table;

pub use live::live_command;
pub use lookup::{batch_command, lookup_command};
pub use table::table_command;
