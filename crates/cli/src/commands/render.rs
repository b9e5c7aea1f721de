//! Static page rendering.
//!
//! # Usage
//!
//! ```bash
//! # Render the bundled demo catalog to stdout
//! lexic render
//!
//! # Render a catalog file to disk
//! lexic render catalog.json -o preview.html
//! ```

use std::path::Path;

use lexic_storefront::catalog_source::load_catalog;
use lexic_storefront::config::StorefrontConfig;
use lexic_storefront::render::render_page;
use lexic_storefront::widget::Storefront;

use super::CommandError;

/// Render the initial storefront page for a catalog.
///
/// Uses the demo catalog when `catalog` is `None`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or rendering fails.
pub fn run(catalog: Option<&Path>, config: &StorefrontConfig) -> Result<String, CommandError> {
    let catalog = load_catalog(catalog)?;
    let storefront = Storefront::new(catalog, config.selection.clone())
        .with_collection_title(config.collection_title.clone());

    Ok(render_page(&storefront)?)
}

/// Write rendered HTML to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_to(path: &Path, html: &str) -> Result<(), CommandError> {
    std::fs::write(path, html).map_err(|source| CommandError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> StorefrontConfig {
        StorefrontConfig::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn test_render_demo_page() {
        let html = run(None, &config()).unwrap();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("The Lexic Cuff Ring"));
        assert!(html.contains("Ring Collection"));
    }

    #[test]
    fn test_render_uses_configured_title() {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "STOREFRONT_COLLECTION_TITLE").then(|| "Bridal".to_string())
        })
        .unwrap();
        let html = run(None, &config).unwrap();
        assert!(html.contains("Bridal"));
    }

    #[test]
    fn test_write_to_unwritable_path() {
        let err = write_to(Path::new("/no/such/dir/page.html"), "<p></p>").unwrap_err();
        assert!(matches!(err, CommandError::Write { .. }));
    }
}
