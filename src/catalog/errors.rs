use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to access catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
