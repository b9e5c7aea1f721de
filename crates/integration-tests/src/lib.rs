//! Integration tests for the Lexic storefront widget.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lexic-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_widget` - Gesture sequences against the widget state
//! - `storefront_routes` - HTTP gestures and fragments through the router
//!
//! Everything runs in-process against the bundled demo catalog; no server or
//! network is needed.

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use lexic_storefront::catalog_source::demo_catalog;
use lexic_storefront::state::AppState;
use lexic_storefront::widget::{SelectionPolicy, Storefront};
use tower::ServiceExt;

/// A widget over the demo catalog with the default selection policy.
///
/// # Panics
///
/// Panics if the bundled demo catalog is malformed.
#[must_use]
pub fn demo_storefront() -> Storefront {
    Storefront::new(
        demo_catalog().expect("bundled demo catalog parses"),
        SelectionPolicy::default(),
    )
}

/// A fresh router over [`demo_storefront`], without Sentry layers.
#[must_use]
pub fn demo_app() -> Router {
    lexic_storefront::app(
        AppState::new(demo_storefront()),
        Path::new(lexic_storefront::config::DEFAULT_STATIC_DIR),
    )
}

/// Response parts collected for assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Send a bodiless request through `app` and collect the response.
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not UTF-8.
pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("UTF-8 body"),
    }
}
