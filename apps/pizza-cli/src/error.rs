//! # Application Error Type
//!
//! Errors that end the terminal session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Pizza Desk                             │
//! │                                                                         │
//! │  Recoverable (printed, session continues)                              │
//! │  ─────────────────────────────────────────                              │
//! │  CoreError::DuplicateName / NotFound / Validation / ...                │
//! │  StoreError on save ──► "Warning: Could not save menu to file."        │
//! │                                                                         │
//! │  Fatal (main prints it, exit status 1)                                 │
//! │  ─────────────────────────────────────                                  │
//! │  ConfigError ──┐                                                        │
//! │  io::Error ────┼──► CliError                                            │
//! │  StoreError ───┤    (data directory, terminal I/O)                      │
//! │  CoreError ────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use pizza_core::CoreError;
use pizza_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not create data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading the terminal or writing to it failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application operations.
pub type CliResult<T> = Result<T, CliError>;
