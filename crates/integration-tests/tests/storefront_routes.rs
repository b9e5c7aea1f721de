//! HTTP gestures and fragments through the storefront router.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use lexic_integration_tests::{demo_app, send};

#[tokio::test]
async fn test_home_page_renders_initial_state() {
    let app = demo_app();
    let response = send(&app, Method::GET, "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("The Lexic Cuff Ring"));
    assert!(response.body.contains("Your cart is empty"));
    assert!(response.body.contains("id=\"cart-count\">0<"));
}

#[tokio::test]
async fn test_add_featured_refreshes_badge_and_drawer() {
    let app = demo_app();
    send(&app, Method::POST, "/widget/swatch/1").await;
    send(&app, Method::POST, "/widget/size/3").await;

    let response = send(&app, Method::POST, "/widget/add").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get("HX-Trigger").is_none());
    assert!(response.body.contains("id=\"cart-count\">1<"));
    assert!(response.body.contains("aria-hidden=\"false\""));
    assert!(response.body.contains("Size: 6.5"));
    assert!(!response.body.contains("id=\"product-root\""));

    // State persists across requests
    let badge = send(&app, Method::GET, "/widget/badge").await;
    assert!(badge.body.contains("$69.90"));
    assert!(!badge.body.contains("hx-swap-oob"));
}

#[tokio::test]
async fn test_collection_add_and_unknown_product() {
    let app = demo_app();

    let response = send(&app, Method::POST, "/widget/add/r1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("aria-hidden=\"true\""));
    assert!(response.body.contains("First Product Name"));

    let response = send(&app, Method::POST, "/widget/add/r99").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let drawer = send(&app, Method::GET, "/widget/drawer").await;
    assert!(drawer.body.contains("x 1"));
    assert!(drawer.body.contains("$15.00"));
}

#[tokio::test]
async fn test_drawer_gestures() {
    let app = demo_app();

    let response = send(&app, Method::POST, "/widget/outside-click").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = send(&app, Method::POST, "/widget/drawer/open").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("aria-hidden=\"false\""));
    assert!(response.headers.get("HX-Trigger").is_none());

    let response = send(&app, Method::POST, "/widget/outside-click").await;
    assert!(response.body.contains("aria-hidden=\"true\""));

    let response = send(&app, Method::POST, "/widget/drawer/close").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_selection_fragments_reflect_state() {
    let app = demo_app();
    send(&app, Method::POST, "/widget/size/0").await;

    let featured = send(&app, Method::GET, "/widget/featured").await;
    assert_eq!(featured.status, StatusCode::OK);
    assert_eq!(featured.body.matches("class=\"size active\"").count(), 1);
    let active_chip = featured.body.split("class=\"size active\"").nth(1).unwrap();
    assert!(active_chip.trim_start().starts_with("data-size=\"5\""));

    let collection = send(&app, Method::GET, "/widget/collection").await;
    assert!(collection.body.contains("/widget/add/r4"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = demo_app();
    let response = send(&app, Method::GET, "/widget/nothing-here").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_assets_are_served() {
    let app = demo_app();
    let page = send(&app, Method::GET, "/").await;

    let assets: Vec<&str> = page
        .body
        .split('"')
        .filter(|value| value.starts_with("/static/"))
        .collect();
    assert!(assets.contains(&"/static/css/main.css"));
    assert!(assets.contains(&"/static/images/first-ring.svg"));

    for asset in assets {
        let response = send(&app, Method::GET, asset).await;
        assert_eq!(response.status, StatusCode::OK, "{asset}");
    }

    assert!(page.body.contains("src=\"https://unpkg.com/htmx.org@2.0.4/"));
}
