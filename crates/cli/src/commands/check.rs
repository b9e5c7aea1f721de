//! Catalog validation.
//!
//! # Usage
//!
//! ```bash
//! lexic check crates/storefront/data/catalog.json
//! ```
//!
//! Exits non-zero when the file is unreadable, malformed, or empty.

use std::fmt;
use std::path::Path;

use lexic_core::Catalog;
use lexic_storefront::catalog_source::load_catalog;
use lexic_storefront::widget::SelectionPolicy;

use super::CommandError;

/// What a shopper would see from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub featured_id: String,
    pub featured_name: String,
    pub featured_price: String,
    pub collection_size: usize,
    pub swatches: usize,
    pub sizes: Vec<(String, bool)>,
    pub duplicate_ids: Vec<String>,
}

impl CatalogSummary {
    /// Summarize `catalog` under `policy`.
    #[must_use]
    pub fn new(catalog: &Catalog, policy: &SelectionPolicy) -> Self {
        let featured = catalog.featured();
        let swatches = featured
            .color_images
            .as_ref()
            .map_or(featured.colors.len(), Vec::len);

        Self {
            featured_id: featured.id.to_string(),
            featured_name: featured.name.clone(),
            featured_price: featured.display_price(),
            collection_size: catalog.collection().len(),
            swatches,
            sizes: featured
                .sizes
                .iter()
                .map(|&size| (size.to_string(), policy.is_size_available(size)))
                .collect(),
            duplicate_ids: catalog
                .duplicate_ids()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// No size can be picked, so the featured product is added without one.
    #[must_use]
    pub fn has_no_available_size(&self) -> bool {
        !self.sizes.is_empty() && self.sizes.iter().all(|(_, available)| !available)
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "featured:   {} ({}) {}",
            self.featured_name, self.featured_id, self.featured_price
        )?;
        writeln!(f, "collection: {} products", self.collection_size)?;
        writeln!(f, "swatches:   {}", self.swatches)?;

        let sizes: Vec<String> = self
            .sizes
            .iter()
            .map(|(label, available)| {
                if *available {
                    label.clone()
                } else {
                    format!("{label} (unavailable)")
                }
            })
            .collect();
        write!(f, "sizes:      {}", sizes.join(", "))?;

        for id in &self.duplicate_ids {
            write!(f, "\nwarning: duplicate product id {id}")?;
        }
        Ok(())
    }
}

/// Load and summarize the catalog at `path`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn run(path: &Path, policy: &SelectionPolicy) -> Result<CatalogSummary, CommandError> {
    let catalog = load_catalog(Some(path))?;
    let summary = CatalogSummary::new(&catalog, policy);

    if summary.has_no_available_size() {
        tracing::warn!(product_id = %summary.featured_id, "featured product has no available size");
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lexic_storefront::catalog_source::demo_catalog;

    use super::*;

    #[test]
    fn test_demo_catalog_summary() {
        let summary = CatalogSummary::new(&demo_catalog().unwrap(), &SelectionPolicy::default());

        assert_eq!(summary.featured_id, "lexic-cuff");
        assert_eq!(summary.featured_price, "$69.90");
        assert_eq!(summary.collection_size, 4);
        assert_eq!(summary.swatches, 3);
        assert!(summary.duplicate_ids.is_empty());
        assert!(summary.sizes.contains(&("7".to_string(), false)));
        assert!(!summary.has_no_available_size());

        let text = summary.to_string();
        assert!(text.contains("collection: 4 products"));
        assert!(text.contains("7 (unavailable)"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_summary_reports_duplicates_and_blocked_sizes() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": "a", "name": "A", "price": 100, "sizes": [7]},
                {"id": "b", "name": "B", "price": 100},
                {"id": "b", "name": "B again", "price": 100}
            ]"#,
        )
        .unwrap();
        let summary = CatalogSummary::new(&catalog, &SelectionPolicy::default());

        assert_eq!(summary.duplicate_ids, ["b"]);
        assert!(summary.has_no_available_size());
        assert!(summary.to_string().contains("warning: duplicate product id b"));
    }

    #[test]
    fn test_run_fails_on_missing_file() {
        let err = run(Path::new("/no/such/catalog.json"), &SelectionPolicy::default()).unwrap_err();
        assert!(matches!(err, CommandError::Catalog(_)));
    }
}
