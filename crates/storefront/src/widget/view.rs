//! View models for the four widget surfaces.
//!
//! These are plain data: every string is already formatted, so templates
//! only lay them out.

use lexic_core::{Catalog, CartLine, Product, title_case};

/// Message shown in the drawer when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Number of secondary gallery images next to the primary one.
const GALLERY_SECONDARY_IMAGES: usize = 3;

/// Image display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// One row of the featured spec table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

/// A color swatch on the featured panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchView {
    pub index: usize,
    /// Color token; empty when the swatch image has no matching color.
    pub color: String,
    /// Swatch image; `None` renders a solid block of `color`.
    pub image: Option<ImageView>,
    pub active: bool,
}

/// A size chip on the featured panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeChipView {
    pub index: usize,
    pub label: String,
    pub disabled: bool,
    pub active: bool,
}

/// Featured product panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: Option<String>,
    pub primary_image: Option<ImageView>,
    pub gallery: Vec<ImageView>,
    pub specs: Vec<SpecRow>,
    pub swatches: Vec<SwatchView>,
    pub sizes: Vec<SizeChipView>,
}

/// A card in the collection grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    /// Add-to-cart endpoint with the id percent-encoded as one path segment.
    pub add_url: String,
    pub name: String,
    pub price: String,
    pub thumbnail: Option<ImageView>,
}

/// Collection grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView {
    pub title: String,
    pub cards: Vec<ProductCardView>,
}

/// Cart count badge with running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartBadgeView {
    pub count: u64,
    pub total: String,
}

/// One cart line in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub key: String,
    pub name: String,
    pub thumbnail: Option<ImageView>,
    pub selection: Option<String>,
    pub unit_price: String,
    pub quantity: u32,
}

/// Cart drawer contents and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartDrawerView {
    pub open: bool,
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub empty_message: &'static str,
}

/// Re-rendered surfaces after a gesture; `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surfaces {
    pub featured: Option<FeaturedView>,
    pub badge: Option<CartBadgeView>,
    pub drawer: Option<CartDrawerView>,
}

// =============================================================================
// Swatch and size sources
// =============================================================================

/// A swatch as declared by the product, before selection state is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwatchSource<'a> {
    pub image: Option<&'a str>,
    pub color: &'a str,
}

/// Swatches for a product: one per color image when present, else one solid
/// block per color.
pub(crate) fn swatch_sources(product: &Product) -> Vec<SwatchSource<'_>> {
    product.color_images.as_ref().map_or_else(
        || {
            product
                .colors
                .iter()
                .map(|color| SwatchSource {
                    image: None,
                    color,
                })
                .collect()
        },
        |images| {
            images
                .iter()
                .enumerate()
                .map(|(idx, image)| SwatchSource {
                    image: Some(image),
                    color: product.colors.get(idx).map_or("", String::as_str),
                })
                .collect()
        },
    )
}

// =============================================================================
// Type Conversions
// =============================================================================

impl SwatchView {
    pub(crate) fn new(index: usize, source: SwatchSource<'_>, active: bool) -> Self {
        Self {
            index,
            color: source.color.to_owned(),
            image: source.image.map(|url| ImageView {
                url: url.to_owned(),
                alt: format!("color-{}", index + 1),
            }),
            active,
        }
    }
}

impl FeaturedView {
    /// Build the panel from the product plus already-resolved chips.
    pub(crate) fn new(
        product: &Product,
        swatches: Vec<SwatchView>,
        sizes: Vec<SizeChipView>,
    ) -> Self {
        let primary_image = product.primary_image().map(|url| ImageView {
            url: url.to_owned(),
            alt: product.name.clone(),
        });
        let gallery = product
            .images
            .iter()
            .enumerate()
            .skip(1)
            .take(GALLERY_SECONDARY_IMAGES)
            .map(|(idx, url)| ImageView {
                url: url.clone(),
                alt: format!("{} {}", product.name, idx + 1),
            })
            .collect();
        let specs = product
            .specs
            .iter()
            .map(|(name, value)| SpecRow {
                label: title_case(name),
                value: value.clone(),
            })
            .collect();

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.display_price(),
            description: product.description.clone(),
            primary_image,
            gallery,
            specs,
            swatches,
            sizes,
        }
    }
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            add_url: format!("/widget/add/{}", urlencoding::encode(product.id.as_str())),
            name: product.name.clone(),
            price: product.display_price(),
            thumbnail: product.primary_image().map(|url| ImageView {
                url: url.to_owned(),
                alt: product.name.clone(),
            }),
        }
    }
}

impl CartLineView {
    /// Thumbnail comes from the catalog product, if it is still listed.
    pub(crate) fn new(line: &CartLine, catalog: &Catalog) -> Self {
        let thumbnail = catalog
            .find_by_id(line.product_id())
            .and_then(Product::primary_image)
            .map(|url| ImageView {
                url: url.to_owned(),
                alt: line.name().to_owned(),
            });

        Self {
            key: line.key().to_string(),
            name: line.name().to_owned(),
            thumbnail,
            selection: line.selection().summary(),
            unit_price: line.price().display(line.currency()),
            quantity: line.quantity(),
        }
    }
}
