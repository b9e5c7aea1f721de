//! HTTP route handlers for the storefront widget.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Full storefront page
//! GET  /health                    - Health check
//!
//! # Gestures (HTMX, respond with out-of-band swaps or 204)
//! POST /widget/swatch/{index}     - Select a color swatch
//! POST /widget/size/{index}       - Select a size chip
//! POST /widget/add                - Add the featured product
//! POST /widget/add/{product_id}   - Add a collection product
//! POST /widget/drawer/open        - Open the cart drawer
//! POST /widget/drawer/close       - Close the cart drawer
//! POST /widget/outside-click      - Click outside the drawer
//!
//! # Surface fragments
//! GET  /widget/featured           - Featured panel
//! GET  /widget/collection         - Collection grid
//! GET  /widget/badge              - Cart badge
//! GET  /widget/drawer             - Cart drawer
//! ```

pub mod home;
pub mod widget;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the widget routes router.
pub fn widget_routes() -> Router<AppState> {
    Router::new()
        .route("/swatch/{index}", post(widget::select_swatch))
        .route("/size/{index}", post(widget::select_size))
        .route("/add", post(widget::add_featured))
        .route("/add/{product_id}", post(widget::add_collection_item))
        .route("/drawer/open", post(widget::open_drawer))
        .route("/drawer/close", post(widget::close_drawer))
        .route("/outside-click", post(widget::outside_click))
        // Fragments
        .route("/featured", get(widget::featured))
        .route("/collection", get(widget::collection))
        .route("/badge", get(widget::badge))
        .route("/drawer", get(widget::drawer))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        .route("/health", get(health))
        // Widget gestures and fragments
        .nest("/widget", widget_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
