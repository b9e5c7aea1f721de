//! Lexic Storefront library.
//!
//! The storefront widget (featured product, collection grid, cart badge and
//! drawer) plus the axum host that renders it. Provided as a library so the
//! widget can be tested and rendered outside the server binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog_source;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod widget;

use std::path::Path;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router with static assets and request tracing.
///
/// Sentry layers are added by the binary so tests run without a client.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
