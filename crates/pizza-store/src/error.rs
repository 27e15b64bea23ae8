//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open / write / rename)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::Unavailable ← Adds the path and what was being done       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session driver prints "Warning: Could not save menu to file."         │
//! │  and keeps the in-memory catalog                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use pizza_core::CoreError;
use thiserror::Error;

/// Catalog file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog file could not be opened, created, written or replaced.
    ///
    /// ## When This Occurs
    /// - The data directory does not exist or is read-only
    /// - The disk is full
    /// - The path points at a directory
    #[error("Cannot {action} catalog file {}: {source}", .path.display())]
    Unavailable {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A catalog rule failed while building the catalog (seeding).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates an Unavailable error for a given action and path.
    pub fn unavailable(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Unavailable {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
