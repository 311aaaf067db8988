//! Router-level tests for the session gate.
//!
//! These exercise the assembled Axum router in process: the protected
//! routes must redirect before producing a body when the refresh cookie
//! is absent, and must serve the shell with only derived session facts
//! when it is present.

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{COOKIE, LOCATION},
        Request, StatusCode,
    },
    Router,
};
use konto_gate::gate::{router, AppState};
use std::path::Path;
use tower::ServiceExt;

const SHELL: &str = "<html><head><title>konto</title></head><body><div id=\"app\"></div></body></html>";

fn test_router() -> Router {
    let state = AppState::new(SHELL.to_string());
    router(state, Path::new("target/test-assets"))
}

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[tokio::test]
async fn protected_route_without_cookie_redirects_to_root() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("/")
    );

    // The render never occurs: no page body accompanies the redirect.
    let body = body_string(response.into_body()).await;
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn protected_subpath_is_gated_too() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/dashboard/users")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn protected_route_with_cookie_serves_the_shell_with_a_hint() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .header(COOKIE, "refreshToken=0123456789abcdef")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("window.KONTO_SESSION"));
    assert!(body.contains("\"refreshTokenPresent\":true"));
    assert!(body.contains("\"refreshTokenLength\":16"));
    // Derived facts only; the cookie value stays server-side.
    assert!(!body.contains("0123456789abcdef"));
}

#[tokio::test]
async fn an_empty_cookie_value_still_redirects() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .header(COOKIE, "refreshToken=")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn public_routes_serve_the_plain_shell() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/register")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("<div id=\"app\">"));
    assert!(!body.contains("window.KONTO_SESSION"));
}

#[tokio::test]
async fn health_reports_status_version_and_timestamp() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-app"));

    let body = body_string(response.into_body()).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).expect("health json");
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
    assert!(parsed["timestamp"].as_u64().unwrap_or(0) > 0);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "01J00000000000000000000000")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("01J00000000000000000000000")
    );
}
