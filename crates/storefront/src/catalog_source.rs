//! Catalog loading.
//!
//! The catalog is read once at startup, either from a JSON file or from the
//! demo catalog compiled into the binary.

use std::path::{Path, PathBuf};

use lexic_core::{Catalog, CatalogError};
use thiserror::Error;

/// Demo catalog bundled with the storefront.
pub const DEMO_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Errors loading the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse the bundled demo catalog.
///
/// # Errors
///
/// Returns an error only if the bundled data is malformed.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(DEMO_CATALOG_JSON)
}

/// Load the catalog from `path`, or the demo catalog when `path` is `None`.
///
/// Duplicate product ids are logged but not rejected; lookups use the first
/// entry.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid catalog, or
/// holds no products.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let catalog = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Catalog::from_json(&json)?
        }
        None => demo_catalog()?,
    };

    for id in catalog.duplicate_ids() {
        tracing::warn!(
            product_id = %id,
            "duplicate product id in catalog, lookups use the first entry"
        );
    }

    tracing::info!(
        products = catalog.product_count(),
        featured = %catalog.featured().id,
        source = path.map_or_else(|| "demo".to_string(), |p| p.display().to_string()),
        "catalog loaded"
    );

    Ok(catalog)
}
