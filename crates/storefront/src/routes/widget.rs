//! Widget gesture and fragment handlers.
//!
//! Each gesture handler applies one gesture under the widget lock, snapshots
//! the surfaces it invalidated, and renders them outside the lock as HTMX
//! out-of-band swaps. A gesture that changes nothing answers `204 No Content`.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use lexic_core::ProductId;
use tracing::instrument;

use crate::error::Result;
use crate::render::{
    CartBadgeTemplate, CartDrawerTemplate, CollectionGridTemplate, FeaturedPanelTemplate,
    RefreshTemplate,
};
use crate::state::AppState;
use crate::widget::Gesture;

/// Apply a gesture and render the refreshed surfaces.
fn dispatch(state: &AppState, gesture: Gesture) -> Result<Response> {
    let kind = gesture.kind();
    let (refresh, surfaces) = state.with_storefront(|storefront| {
        storefront
            .apply(gesture)
            .map(|refresh| (refresh, storefront.surfaces(refresh)))
    })?;

    if refresh.is_empty() {
        tracing::debug!(gesture = kind, "gesture changed nothing");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Html(RefreshTemplate::from(surfaces).render()?).into_response())
}

// =============================================================================
// Gestures
// =============================================================================

/// Select a color swatch on the featured panel.
#[instrument(skip(state))]
pub async fn select_swatch(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response> {
    dispatch(&state, Gesture::SelectSwatch(index))
}

/// Select a size chip on the featured panel.
#[instrument(skip(state))]
pub async fn select_size(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response> {
    dispatch(&state, Gesture::SelectSize(index))
}

/// Add the featured product with the current selection (opens the drawer).
#[instrument(skip(state))]
pub async fn add_featured(State(state): State<AppState>) -> Result<Response> {
    dispatch(&state, Gesture::AddFeaturedToCart)
}

/// Add a collection product to the cart.
#[instrument(skip(state))]
pub async fn add_collection_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Response> {
    dispatch(&state, Gesture::AddCollectionItemToCart(ProductId::new(product_id)))
}

#[instrument(skip(state))]
pub async fn open_drawer(State(state): State<AppState>) -> Result<Response> {
    dispatch(&state, Gesture::OpenDrawer)
}

#[instrument(skip(state))]
pub async fn close_drawer(State(state): State<AppState>) -> Result<Response> {
    dispatch(&state, Gesture::CloseDrawer)
}

/// Click anywhere outside the drawer and its triggers.
#[instrument(skip(state))]
pub async fn outside_click(State(state): State<AppState>) -> Result<Response> {
    dispatch(&state, Gesture::OutsideClick)
}

// =============================================================================
// Fragments
// =============================================================================

/// Featured panel fragment.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> impl IntoResponse {
    FeaturedPanelTemplate {
        featured: state.with_storefront(|s| s.featured_view()),
        oob: false,
    }
}

/// Collection grid fragment.
#[instrument(skip(state))]
pub async fn collection(State(state): State<AppState>) -> impl IntoResponse {
    CollectionGridTemplate {
        collection: state.with_storefront(|s| s.collection_view()),
        oob: false,
    }
}

/// Cart badge fragment.
#[instrument(skip(state))]
pub async fn badge(State(state): State<AppState>) -> impl IntoResponse {
    CartBadgeTemplate {
        badge: state.with_storefront(|s| s.badge_view()),
        oob: false,
    }
}

/// Cart drawer fragment.
#[instrument(skip(state))]
pub async fn drawer(State(state): State<AppState>) -> impl IntoResponse {
    CartDrawerTemplate {
        drawer: state.with_storefront(|s| s.drawer_view()),
        oob: false,
    }
}
