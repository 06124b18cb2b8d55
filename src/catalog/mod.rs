//! Precomputed target → expressions catalog

mod build;
mod config;
mod errors;
mod store;

pub use build::SolutionCatalog;
pub use config::{CatalogConfig, DEFAULT_CACHE_FILE};
pub use errors::CatalogError;

#[cfg(test)]
mod tests;
