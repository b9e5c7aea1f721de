//! User gestures and the surfaces they invalidate.

use lexic_core::ProductId;
use thiserror::Error;

/// Everything a shopper can do to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Click a color swatch on the featured panel.
    SelectSwatch(usize),
    /// Click a size chip on the featured panel.
    SelectSize(usize),
    /// Add the featured product with the current size and color.
    AddFeaturedToCart,
    /// Add a collection card's product, no options captured.
    AddCollectionItemToCart(ProductId),
    OpenDrawer,
    CloseDrawer,
    /// Click anywhere outside the drawer and its trigger.
    OutsideClick,
}

impl Gesture {
    /// Short name used in logs and metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SelectSwatch(_) => "select_swatch",
            Self::SelectSize(_) => "select_size",
            Self::AddFeaturedToCart => "add_featured",
            Self::AddCollectionItemToCart(_) => "add_collection_item",
            Self::OpenDrawer => "open_drawer",
            Self::CloseDrawer => "close_drawer",
            Self::OutsideClick => "outside_click",
        }
    }
}

/// A gesture that could not be applied. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    /// The gesture referenced a product the catalog does not hold.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Surfaces that must be re-rendered after a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refresh {
    pub featured: bool,
    pub badge: bool,
    pub drawer: bool,
}

impl Refresh {
    /// Nothing changed.
    pub const NONE: Self = Self {
        featured: false,
        badge: false,
        drawer: false,
    };

    /// Only the featured panel changed.
    pub const FEATURED: Self = Self {
        featured: true,
        badge: false,
        drawer: false,
    };

    /// Cart contents changed: badge and drawer list.
    pub const CART: Self = Self {
        featured: false,
        badge: true,
        drawer: true,
    };

    /// Only the drawer changed.
    pub const DRAWER: Self = Self {
        featured: false,
        badge: false,
        drawer: true,
    };

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.featured || self.badge || self.drawer)
    }
}
