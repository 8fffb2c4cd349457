//! Disk storage for the route catalog.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::RouteCatalog;

use super::PersistError;
use super::record::{ShortTimes, parse_records, records_to_routes, routes_to_records};

/// Default routes file, relative to the working directory.
pub const DEFAULT_ROUTES_FILE: &str = "bus_routes.json";

/// The routes file.
#[derive(Debug, Clone)]
pub struct RouteStore {
    path: PathBuf,
}

impl RouteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the routes file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog from disk.
    ///
    /// Returns `Ok(None)` if the file does not exist. Records that cannot
    /// become routes are skipped with a warning, as are records repeating
    /// an earlier id.
    pub fn load(&self) -> Result<Option<RouteCatalog>, PersistError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let routes = records_to_routes(parse_records(&contents)?, ShortTimes::Keep);
        let catalog = RouteCatalog::new(routes);

        info!(
            path = %self.path.display(),
            routes = catalog.len(),
            "Loaded routes"
        );

        Ok(Some(catalog))
    }

    /// Load the catalog, or save and return `seed()` if there is no file.
    ///
    /// A file that exists but cannot be read is an error and is left
    /// untouched.
    pub fn load_or_seed(
        &self,
        seed: impl FnOnce() -> RouteCatalog,
    ) -> Result<RouteCatalog, PersistError> {
        if let Some(catalog) = self.load()? {
            return Ok(catalog);
        }

        info!(path = %self.path.display(), "No routes file, seeding routes");
        let catalog = seed();
        self.save(&catalog)?;
        Ok(catalog)
    }

    /// Save the catalog to disk.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, catalog: &RouteCatalog) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|source| PersistError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = export_json(catalog)?;
        std::fs::write(&self.path, json).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            routes = catalog.len(),
            "Saved routes"
        );

        Ok(())
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTES_FILE)
    }
}

/// The catalog as pretty-printed JSON, in the on-disk format.
pub fn export_json(catalog: &RouteCatalog) -> Result<String, PersistError> {
    let records = routes_to_records(catalog.routes().iter().map(|r| r.as_ref()));
    Ok(serde_json::to_string_pretty(&records)?)
}
