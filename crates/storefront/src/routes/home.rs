//! Home page route handler.

use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::render::StorefrontPageTemplate;
use crate::state::AppState;

/// Display the full storefront page with the current widget state.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    state.with_storefront(|storefront| StorefrontPageTemplate::from(&*storefront))
}
