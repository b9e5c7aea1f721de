//! The product catalog.
//!
//! A catalog is an ordered, non-empty list of products built once at
//! startup. Position 0 is the featured product; every later position belongs
//! to the collection, in display order.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DEFAULT_CURRENCY_SYMBOL, Price, ProductId, Size};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No products were supplied, so there is nothing to feature.
    #[error("catalog is empty: a featured product is required")]
    Empty,

    /// Catalog data did not match the product shape.
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One sellable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in minor currency units.
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Image references; index 0 is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Swatch images, parallel to `colors`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attribute name to display value, in declared order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub specs: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<Size>,
}

impl Product {
    /// Create a product with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            currency: None,
            images: Vec::new(),
            color_images: None,
            description: None,
            specs: IndexMap::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Currency symbol, falling back to [`DEFAULT_CURRENCY_SYMBOL`].
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    /// The primary (thumbnail) image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Formatted price in this product's currency.
    #[must_use]
    pub fn display_price(&self) -> String {
        self.price.display(self.currency_symbol())
    }
}

/// Ordered, immutable product catalog with a guaranteed featured product.
#[derive(Debug, Clone)]
pub struct Catalog {
    featured: Product,
    collection: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if `products` is empty.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut products = products.into_iter();
        let featured = products.next().ok_or(CatalogError::Empty)?;
        Ok(Self {
            featured,
            collection: products.collect(),
        })
    }

    /// Parse a JSON array of products and build a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed data and
    /// [`CatalogError::Empty`] for an empty array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The product at position 0.
    #[must_use]
    pub const fn featured(&self) -> &Product {
        &self.featured
    }

    /// Every product after the featured one, in display order.
    #[must_use]
    pub fn collection(&self) -> &[Product] {
        &self.collection
    }

    /// First product whose id matches, if any.
    #[must_use]
    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.iter().find(|product| &product.id == id)
    }

    /// All products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        std::iter::once(&self.featured).chain(self.collection.iter())
    }

    /// Number of products, featured included.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.collection.len() + 1
    }

    /// Ids that appear more than once, in order of their second occurrence.
    ///
    /// Duplicates are tolerated; [`Catalog::find_by_id`] returns the first.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&ProductId> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for product in self.iter() {
            if !seen.insert(&product.id) && !duplicates.contains(&&product.id) {
                duplicates.push(&product.id);
            }
        }
        duplicates
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ring(id: &str) -> Product {
        Product::new(id, format!("Ring {id}"), Price::from_minor(1500))
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_featured_and_collection_partition() {
        let catalog = Catalog::new(vec![ring("a"), ring("b"), ring("c")]).unwrap();
        assert_eq!(catalog.featured().id.as_str(), "a");

        let collection: Vec<&str> = catalog.collection().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(collection, ["b", "c"]);
        assert_eq!(catalog.collection().len(), catalog.product_count() - 1);
        assert!(!catalog.collection().contains(catalog.featured()));
    }

    #[test]
    fn test_single_product_catalog_has_empty_collection() {
        let catalog = Catalog::new(vec![ring("only")]).unwrap();
        assert!(catalog.collection().is_empty());
        assert_eq!(catalog.product_count(), 1);
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let mut second = ring("b");
        second.name = "Second".to_string();
        let mut dup = ring("b");
        dup.name = "Duplicate".to_string();
        let catalog = Catalog::new(vec![ring("a"), second, dup]).unwrap();

        assert_eq!(catalog.find_by_id(&ProductId::new("b")).unwrap().name, "Second");
        assert_eq!(catalog.find_by_id(&ProductId::new("a")).unwrap().name, "Ring a");
        assert!(catalog.find_by_id(&ProductId::new("missing")).is_none());
        assert_eq!(catalog.duplicate_ids(), [&ProductId::new("b")]);
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let json = r##"[
            {
                "id": "lexic-cuff",
                "name": "The Lexic Cuff Ring",
                "price": 6990,
                "currency": "$",
                "images": ["a.png", "b.png"],
                "colorImages": ["c.png"],
                "specs": { "gold": "18k", "diamond": "2.4c", "clarity": "92%" },
                "colors": ["#ffffff"],
                "sizes": [5, 6.5, 7]
            },
            { "id": "r1", "name": "First", "price": 1500, "images": ["r1.png"] }
        ]"##;
        let catalog = Catalog::from_json(json).unwrap();

        let featured = catalog.featured();
        assert_eq!(featured.color_images.as_deref(), Some(&["c.png".to_string()][..]));
        let spec_keys: Vec<&str> = featured.specs.keys().map(String::as_str).collect();
        assert_eq!(spec_keys, ["gold", "diamond", "clarity"]);
        assert_eq!(featured.sizes.len(), 3);

        let plain = catalog.find_by_id(&ProductId::new("r1")).unwrap();
        assert_eq!(plain.currency_symbol(), "$");
        assert_eq!(plain.display_price(), "$15.00");
        assert_eq!(plain.primary_image(), Some("r1.png"));
        assert!(plain.description.is_none());
        assert!(plain.color_images.is_none());
        assert!(plain.sizes.is_empty());
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let json = r#"[{ "id": "x", "name": "X", "price": -5 }]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }
}
