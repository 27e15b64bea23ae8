//! # Pizza Desk Terminal Library
//!
//! Startup, logging and the interactive session for the `pizza` binary.
//!
//! ## Module Organization
//! ```text
//! pizza_cli/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── config.rs       ◄─── Environment configuration
//! ├── session.rs      ◄─── Menus, prompts, order flow
//! ├── render.rs       ◄─── Menu / summary / split tables
//! └── error.rs        ◄─── Fatal error type
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::fs;
use std::io::{BufRead, Write};

use pizza_store::{CatalogOrigin, CatalogStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::{CliError, CliResult};
use session::Session;

/// Starts a session against the configured catalog file.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Create Data Directory ────────────────────────────────────────────► │
/// │     • config.data_dir, created if missing                               │
/// │                                                                         │
/// │  2. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Read data_dir/menu_file                                           │
/// │     • No file: seed the six default pizzas and save them                │
/// │                                                                         │
/// │  3. Run Session ──────────────────────────────────────────────────────► │
/// │     • Main menu loop until Exit or end of input                         │
/// │     • Catalog saved on exit                                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run<R: BufRead, W: Write>(config: AppConfig, input: R, mut output: W) -> CliResult<()> {
    writeln!(output, "=== Pizza Management System ===")?;
    writeln!(output, "Loading pizza menu...")?;

    fs::create_dir_all(&config.data_dir).map_err(|source| CliError::DataDir {
        path: config.data_dir.clone(),
        source,
    })?;

    let store = CatalogStore::new(config.menu_path());
    info!(path = %store.path().display(), "Catalog path determined");

    let opened = store.load_or_seed()?;
    match &opened.origin {
        CatalogOrigin::File => {}
        CatalogOrigin::Seeded => writeln!(output, "Creating default pizza menu...")?,
        CatalogOrigin::SeededUnsaved(_) => {
            writeln!(output, "Creating default pizza menu...")?;
            writeln!(output, "Warning: Could not save menu to file.")?;
        }
    }

    writeln!(
        output,
        "Pizza menu loaded successfully! ({} pizza types available)",
        opened.catalog.len()
    )?;

    let mut session = Session::new(opened.catalog, store, config, input, output);
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with prompts.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show skipped catalog lines and every change
/// - `RUST_LOG=pizza_store=info` - Show load / save activity only
/// - Default: WARN level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
