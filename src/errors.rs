//! Error types for the worklog application.
//!
//! This module defines the error type shared by storage, configuration and
//! the interactive menus.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the worklog application.
#[derive(Error, Debug)]
pub enum WorkLogError {
    /// Errors related to console or file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors raised by the SQLite layer.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Entry was not found when performing an operation.
    #[error("Entry not found: {id}")]
    EntryNotFound { id: i64 },

    /// User input that could not be understood. The message is shown to the user.
    #[error("{message}")]
    InvalidInput { message: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("Input closed")]
    InputClosed,
}

impl WorkLogError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        WorkLogError::InvalidInput {
            message: message.into(),
        }
    }
}
