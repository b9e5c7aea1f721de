//! Storefront widget: catalog, cart, selection and drawer state.
//!
//! [`Storefront`] is built once per session and owns all mutable widget
//! state. Gestures go through [`Storefront::apply`], which mutates state in
//! one step and reports which surfaces need re-rendering. View models are
//! pure projections of that state.
//!
//! ```rust
//! # use lexic_core::{Catalog, Price, Product};
//! # use lexic_storefront::widget::{Gesture, SelectionPolicy, Storefront};
//! let catalog = Catalog::new(vec![Product::new("r1", "Ring", Price::from_minor(1500))])?;
//! let mut storefront = Storefront::new(catalog, SelectionPolicy::default());
//!
//! let refresh = storefront.apply(Gesture::AddFeaturedToCart)?;
//! assert!(refresh.badge && refresh.drawer);
//! assert_eq!(storefront.badge_view().total, "$15.00");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod drawer;
pub mod gesture;
pub mod policy;
pub mod view;

use lexic_core::{Cart, CartItem, Catalog, ProductId, Selection, Size};

pub use drawer::DrawerState;
pub use gesture::{Gesture, GestureError, Refresh};
pub use policy::SelectionPolicy;
pub use view::{
    CartBadgeView, CartDrawerView, CartLineView, CollectionView, EMPTY_CART_MESSAGE, FeaturedView,
    ImageView, ProductCardView, SizeChipView, SpecRow, Surfaces, SwatchView,
};

/// Title shown above the collection grid unless configured otherwise.
pub const DEFAULT_COLLECTION_TITLE: &str = "Ring Collection";

/// All widget state for one shopping session.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    policy: SelectionPolicy,
    collection_title: String,
    active_swatch: Option<usize>,
    active_size: Option<usize>,
    drawer: DrawerState,
}

impl Storefront {
    /// Create a session with an empty cart, closed drawer and the policy's
    /// initial selections.
    ///
    /// The initial size only becomes active if it exists and is available.
    #[must_use]
    pub fn new(catalog: Catalog, policy: SelectionPolicy) -> Self {
        let featured = catalog.featured();
        let swatch_count = view::swatch_sources(featured).len();

        let active_swatch =
            Some(policy.initial_swatch_index()).filter(|&index| index < swatch_count);
        let active_size = Some(policy.initial_size_index()).filter(|&index| {
            featured
                .sizes
                .get(index)
                .is_some_and(|&size| policy.is_size_available(size))
        });

        Self {
            catalog,
            cart: Cart::new(),
            policy,
            collection_title: DEFAULT_COLLECTION_TITLE.to_owned(),
            active_swatch,
            active_size,
            drawer: DrawerState::default(),
        }
    }

    #[must_use]
    pub fn with_collection_title(mut self, title: impl Into<String>) -> Self {
        self.collection_title = title.into();
        self
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn drawer(&self) -> DrawerState {
        self.drawer
    }

    /// Index of the active swatch, if any.
    #[must_use]
    pub const fn active_swatch(&self) -> Option<usize> {
        self.active_swatch
    }

    /// Index of the active size chip, if any.
    #[must_use]
    pub const fn active_size(&self) -> Option<usize> {
        self.active_size
    }

    /// Apply one gesture.
    ///
    /// Out-of-range indices and clicks on disabled chips change nothing and
    /// return [`Refresh::NONE`].
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::ProductNotFound`] when a collection add names
    /// a product the catalog does not hold. State is unchanged.
    pub fn apply(&mut self, gesture: Gesture) -> Result<Refresh, GestureError> {
        tracing::debug!(gesture = gesture.kind(), "applying gesture");

        let refresh = match gesture {
            Gesture::SelectSwatch(index) => self.select_swatch(index),
            Gesture::SelectSize(index) => self.select_size(index),
            Gesture::AddFeaturedToCart => self.add_featured(),
            Gesture::AddCollectionItemToCart(id) => self.add_collection_item(&id)?,
            Gesture::OpenDrawer => {
                self.drawer.open();
                Refresh::DRAWER
            }
            Gesture::CloseDrawer | Gesture::OutsideClick => {
                if self.drawer.close() {
                    Refresh::DRAWER
                } else {
                    Refresh::NONE
                }
            }
        };

        Ok(refresh)
    }

    fn select_swatch(&mut self, index: usize) -> Refresh {
        let swatch_count = view::swatch_sources(self.catalog.featured()).len();
        if index >= swatch_count {
            tracing::debug!(index, swatch_count, "swatch index out of range");
            return Refresh::NONE;
        }
        self.active_swatch = Some(index);
        Refresh::FEATURED
    }

    fn select_size(&mut self, index: usize) -> Refresh {
        let Some(&size) = self.catalog.featured().sizes.get(index) else {
            tracing::debug!(index, "size index out of range");
            return Refresh::NONE;
        };
        if !self.policy.is_size_available(size) {
            tracing::debug!(%size, "ignoring click on unavailable size");
            return Refresh::NONE;
        }
        self.active_size = Some(index);
        Refresh::FEATURED
    }

    /// Active size, or the first available one.
    fn chosen_size(&self) -> Option<Size> {
        let sizes = &self.catalog.featured().sizes;
        self.active_size
            .and_then(|index| sizes.get(index).copied())
            .filter(|&size| self.policy.is_size_available(size))
            .or_else(|| {
                sizes
                    .iter()
                    .copied()
                    .find(|&size| self.policy.is_size_available(size))
            })
    }

    /// Active swatch's color token, or the first swatch's.
    fn chosen_color(&self) -> Option<String> {
        let swatches = view::swatch_sources(self.catalog.featured());
        self.active_swatch
            .and_then(|index| swatches.get(index))
            .or_else(|| swatches.first())
            .map(|swatch| swatch.color)
            .filter(|color| !color.is_empty())
            .map(str::to_owned)
    }

    fn add_featured(&mut self) -> Refresh {
        let mut selection = Selection::new();
        if let Some(size) = self.chosen_size() {
            selection.insert(Selection::SIZE, size.to_string());
        }
        if let Some(color) = self.chosen_color() {
            selection.insert(Selection::COLOR, color);
        }

        let item = CartItem::from_product(self.catalog.featured()).with_selection(selection);
        let key = self.cart.add(item);
        self.drawer.open();

        tracing::info!(line = %key, count = self.cart.count(), "featured product added to cart");
        Refresh::CART
    }

    fn add_collection_item(&mut self, id: &ProductId) -> Result<Refresh, GestureError> {
        let product = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| GestureError::ProductNotFound(id.clone()))?;

        let key = self.cart.add(CartItem::from_product(product));

        tracing::info!(line = %key, count = self.cart.count(), "collection item added to cart");
        Ok(Refresh::CART)
    }

    // =========================================================================
    // View models
    // =========================================================================

    /// Featured panel with current swatch and size selection.
    #[must_use]
    pub fn featured_view(&self) -> FeaturedView {
        let featured = self.catalog.featured();

        let swatches = view::swatch_sources(featured)
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                SwatchView::new(index, source, self.active_swatch == Some(index))
            })
            .collect();

        let sizes = featured
            .sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| SizeChipView {
                index,
                label: size.to_string(),
                disabled: !self.policy.is_size_available(size),
                active: self.active_size == Some(index),
            })
            .collect();

        FeaturedView::new(featured, swatches, sizes)
    }

    /// Collection grid of every non-featured product.
    #[must_use]
    pub fn collection_view(&self) -> CollectionView {
        CollectionView {
            title: self.collection_title.clone(),
            cards: self
                .catalog
                .collection()
                .iter()
                .map(ProductCardView::from)
                .collect(),
        }
    }

    /// Cart count and running total.
    #[must_use]
    pub fn badge_view(&self) -> CartBadgeView {
        CartBadgeView {
            count: self.cart.count(),
            total: self.display_total(),
        }
    }

    /// Drawer lines, total and visibility.
    #[must_use]
    pub fn drawer_view(&self) -> CartDrawerView {
        CartDrawerView {
            open: self.drawer.is_open(),
            lines: self
                .cart
                .lines()
                .iter()
                .map(|line| CartLineView::new(line, &self.catalog))
                .collect(),
            total: self.display_total(),
            empty_message: EMPTY_CART_MESSAGE,
        }
    }

    /// View models for the surfaces a gesture invalidated.
    #[must_use]
    pub fn surfaces(&self, refresh: Refresh) -> Surfaces {
        Surfaces {
            featured: refresh.featured.then(|| self.featured_view()),
            badge: refresh.badge.then(|| self.badge_view()),
            drawer: refresh.drawer.then(|| self.drawer_view()),
        }
    }

    /// Cart total in the store currency (the featured product's).
    fn display_total(&self) -> String {
        self.cart
            .total()
            .display(self.catalog.featured().currency_symbol())
    }
}
