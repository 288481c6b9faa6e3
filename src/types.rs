//! Shared types for the worklog application.
//!
//! Holds the crate-wide `Result` alias, the navigation outcome of the menu
//! flows and the CLI subcommands.
use clap::Subcommand;

use crate::WorkLogError;

/// A specialized Result type for worklog operations.
pub type Result<T> = std::result::Result<T, WorkLogError>;

/// Where control goes once a menu flow has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the main menu again
    MainMenu,
    /// Leave the application
    Quit,
}

/// Available subcommands for the worklog application
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add, search and edit entries through the interactive menus (default)
    Menu,

    /// Log a new entry without the menus
    Add {
        /// Employee name
        #[clap(short, long)]
        name: String,

        /// What was worked on
        #[clap(short, long)]
        task: String,

        /// Time spent, in minutes
        #[clap(short, long)]
        minutes: u32,

        /// Optional note
        #[clap(short = 'N', long)]
        note: Option<String>,

        /// Date of the work (defaults to today), in the configured date format
        #[clap(short, long)]
        date: Option<String>,
    },

    /// List logged entries, oldest first
    List {
        /// Only show the most recent N entries (0 shows all)
        #[clap(short = 'n', long, default_value_t = 0)]
        limit: usize,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },
}
