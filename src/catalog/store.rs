use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::catalog::build::SolutionCatalog;
use crate::catalog::config::CatalogConfig;
use crate::catalog::errors::CatalogError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl SolutionCatalog {
    /// Read a catalog stored as `{"<target>": ["<expr>", ...]}`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(io_error(path))?;
        let entries: BTreeMap<i64, Vec<String>> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| CatalogError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_entries(entries))
    }

    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let file = File::create(path).map_err(io_error(path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self.entries()).map_err(|source| {
            CatalogError::Format {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().map_err(io_error(path))?;

        info!("Saved {} targets to {}", self.len(), path.display());
        Ok(())
    }

    /// Load the catalog at `path`, or build it from `config` and save it there.
    ///
    /// A file that exists but cannot be read or parsed is rebuilt and overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error only if a freshly built catalog cannot be saved.
    pub fn load_or_build(path: &Path, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let started = Instant::now();

        if path.exists() {
            info!("Cache found, loading solutions from {} ...", path.display());
            match Self::load(path) {
                Ok(catalog) => {
                    info!(
                        "Loaded {} targets in {:.2?}",
                        catalog.len(),
                        started.elapsed()
                    );
                    return Ok(catalog);
                }
                Err(err) => warn!("Discarding unreadable cache: {}", err),
            }
        }

        let catalog = Self::build(config);
        catalog.save(path)?;
        info!("Precomputing solutions took {:.2?}", started.elapsed());
        Ok(catalog)
    }
}
