//! # Catalog Store
//!
//! Loads and saves the catalog file.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    load_or_seed()                                       │
//! │                                                                         │
//! │  load(path)                                                             │
//! │     │                                                                   │
//! │     ├── file opened ──► parse lines ──► CatalogOrigin::File            │
//! │     │                   (bad lines skipped, max 20 entries)             │
//! │     │                                                                   │
//! │     └── cannot open ──► default_catalog() ──► save(path)               │
//! │                                                  │                      │
//! │                              ok ◄────────────────┤                      │
//! │                     CatalogOrigin::Seeded        │ failed               │
//! │                                                  ▼                      │
//! │                              CatalogOrigin::SeededUnsaved(err)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The file is opened, read or written in full, and closed inside each call.
//! No handle is kept between calls.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use pizza_core::seed::default_catalog;
use pizza_core::Catalog;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::format::{format_line, parse_line};

/// Default catalog location, relative to the working directory.
pub const DEFAULT_MENU_PATH: &str = "data/pizza_menu.txt";

/// Result of [`CatalogStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// `false` when the file could not be opened; the catalog is then empty
    /// and the caller should seed defaults.
    pub found: bool,
}

/// Where the catalog returned by [`CatalogStore::load_or_seed`] came from.
#[derive(Debug)]
pub enum CatalogOrigin {
    /// Read from the catalog file.
    File,
    /// Built from the defaults and written to the catalog file.
    Seeded,
    /// Built from the defaults, but writing the file failed.
    SeededUnsaved(StoreError),
}

/// A catalog ready for a session, plus how it was obtained.
#[derive(Debug)]
pub struct OpenedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
}

/// File-backed catalog storage.
///
/// ## Usage
/// ```rust,no_run
/// use pizza_store::CatalogStore;
///
/// let store = CatalogStore::new("data/pizza_menu.txt");
/// let opened = store.load_or_seed()?;
///
/// let mut catalog = opened.catalog;
/// catalog.remove("Hawaiian")?;
/// store.save(&catalog)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogStore { path: path.into() }
    }

    /// The catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the catalog file.
    ///
    /// ## Behavior
    /// - Malformed lines are skipped
    /// - Lines repeating an earlier name (any case) are skipped
    /// - Reading stops once 20 pizzas are loaded
    /// - A read error part-way keeps what was parsed so far
    /// - A file that cannot be opened gives an empty catalog, `found = false`
    pub fn load(&self) -> LoadedCatalog {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                if err.kind() == io::ErrorKind::NotFound {
                    debug!(path = %self.path.display(), "No catalog file");
                } else {
                    warn!(path = %self.path.display(), error = %err, "Cannot open catalog file");
                }
                return LoadedCatalog {
                    catalog: Catalog::new(),
                    found: false,
                };
            }
        };

        let mut catalog = Catalog::new();
        let reader = BufReader::new(file);

        for (index, line) in reader.split(b'\n').enumerate() {
            if catalog.is_full() {
                debug!(path = %self.path.display(), "Catalog full, ignoring remaining lines");
                break;
            }

            let bytes = match line {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "Catalog read interrupted");
                    break;
                }
            };

            let line_number = index + 1;
            let text = String::from_utf8_lossy(&bytes);
            match parse_line(&text) {
                Some(pizza) => {
                    if let Err(err) = catalog.insert(pizza) {
                        debug!(line = line_number, error = %err, "Skipping catalog line");
                    }
                }
                None => debug!(line = line_number, "Skipping malformed catalog line"),
            }
        }

        info!(path = %self.path.display(), count = catalog.len(), "Catalog loaded");
        LoadedCatalog {
            catalog,
            found: true,
        }
    }

    /// Writes the catalog, replacing the file.
    ///
    /// Lines go to `<file>.tmp` first, which is then renamed over the
    /// catalog file. If anything fails the previous file is left intact.
    pub fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let temp = self.temp_path();

        let file = File::create(&temp).map_err(|err| StoreError::unavailable("create", &temp, err))?;
        if let Err(err) = write_catalog(file, catalog) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::unavailable("write", &temp, err));
        }

        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::unavailable("replace", &self.path, err));
        }

        info!(path = %self.path.display(), count = catalog.len(), "Catalog saved");
        Ok(())
    }

    /// Loads the catalog, seeding and saving the defaults if there is no file.
    ///
    /// A failed save of the seeded catalog is not an error: the catalog is
    /// still returned and the failure is carried in [`CatalogOrigin`].
    pub fn load_or_seed(&self) -> StoreResult<OpenedCatalog> {
        let loaded = self.load();
        if loaded.found {
            return Ok(OpenedCatalog {
                catalog: loaded.catalog,
                origin: CatalogOrigin::File,
            });
        }

        let catalog = default_catalog()?;
        info!(path = %self.path.display(), count = catalog.len(), "Seeded default catalog");

        let origin = match self.save(&catalog) {
            Ok(()) => CatalogOrigin::Seeded,
            Err(err) => {
                warn!(error = %err, "Could not save default catalog");
                CatalogOrigin::SeededUnsaved(err)
            }
        };

        Ok(OpenedCatalog { catalog, origin })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::new(DEFAULT_MENU_PATH)
    }
}

fn write_catalog(file: File, catalog: &Catalog) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for pizza in catalog {
        writeln!(writer, "{}", format_line(pizza))?;
    }
    writer.flush()
}

// =============================================================================
// Unit Tests
// =============================================================================
