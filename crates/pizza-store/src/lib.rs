//! # pizza-store: Catalog Persistence for Pizza Desk
//!
//! Reads and writes the pizza catalog as a plain text file, one pizza per
//! line. All catalog rules live in `pizza-core`; this crate only moves
//! catalogs between memory and disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizza Desk Data Flow                             │
//! │                                                                         │
//! │  Session driver (pizza-cli)                                            │
//! │       │  load_or_seed() at startup, save() after every change          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pizza-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogStore  │    │    format     │    │  StoreError  │  │   │
//! │  │   │  (store.rs)   │───►│  (format.rs)  │    │  (error.rs)  │  │   │
//! │  │   │ load / save   │    │ parse_line    │    │ Unavailable  │  │   │
//! │  │   │ load_or_seed  │    │ format_line   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/pizza_menu.txt                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Load, save and seed-on-first-run
//! - [`format`] - The `name,price,available` line format
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{CatalogOrigin, CatalogStore, LoadedCatalog, OpenedCatalog, DEFAULT_MENU_PATH};
