//! CLI command implementations.

pub mod check;
pub mod render;

use std::path::PathBuf;

use lexic_storefront::catalog_source::CatalogLoadError;
use lexic_storefront::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be read or is empty.
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    /// Page rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Output could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
