//! Work log application library
//!
//! This library stores employees' work log entries in SQLite and provides the
//! interactive menus used to add, search, browse and edit them.

mod browser;
mod cli;
mod config;
mod entry;
mod errors;
mod filter;
mod helper;
mod storage;
mod types;

// Re-export key components
pub use browser::*;
pub use cli::*;
pub use config::*;
pub use entry::*;
pub use errors::*;
pub use filter::*;
pub use helper::*;
pub use storage::*;
pub use types::*;
