//! Askama templates for the widget surfaces.
//!
//! Every partial takes an `oob` flag. The full page renders partials in
//! place; gesture responses render them as HTMX out-of-band swaps so one
//! response can refresh several surfaces.

use askama::Template;
use askama_web::WebTemplate;

use crate::widget::{
    CartBadgeView, CartDrawerView, CollectionView, FeaturedView, Storefront, Surfaces,
};

/// Pinned htmx build loaded by the full page.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";
/// Subresource integrity hash of [`HTMX_SRC`].
pub const HTMX_INTEGRITY: &str =
    "sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+";

/// Full storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct StorefrontPageTemplate {
    pub htmx_src: &'static str,
    pub htmx_integrity: &'static str,
    pub featured: FeaturedView,
    pub collection: CollectionView,
    pub badge: CartBadgeView,
    pub drawer: CartDrawerView,
    pub oob: bool,
}

impl From<&Storefront> for StorefrontPageTemplate {
    fn from(storefront: &Storefront) -> Self {
        Self {
            htmx_src: HTMX_SRC,
            htmx_integrity: HTMX_INTEGRITY,
            featured: storefront.featured_view(),
            collection: storefront.collection_view(),
            badge: storefront.badge_view(),
            drawer: storefront.drawer_view(),
            oob: false,
        }
    }
}

/// Featured panel fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/featured.html")]
pub struct FeaturedPanelTemplate {
    pub featured: FeaturedView,
    pub oob: bool,
}

/// Collection grid fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/collection.html")]
pub struct CollectionGridTemplate {
    pub collection: CollectionView,
    pub oob: bool,
}

/// Cart badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_badge.html")]
pub struct CartBadgeTemplate {
    pub badge: CartBadgeView,
    pub oob: bool,
}

/// Cart drawer fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub drawer: CartDrawerView,
    pub oob: bool,
}

/// Gesture response: every refreshed surface as an out-of-band swap.
#[derive(Template, WebTemplate)]
#[template(path = "partials/refresh.html")]
pub struct RefreshTemplate {
    pub surfaces: Surfaces,
    pub oob: bool,
}

impl From<Surfaces> for RefreshTemplate {
    fn from(surfaces: Surfaces) -> Self {
        Self {
            surfaces,
            oob: true,
        }
    }
}

/// Render the initial full page for a session.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_page(storefront: &Storefront) -> askama::Result<String> {
    StorefrontPageTemplate::from(storefront).render()
}
