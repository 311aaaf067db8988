//! Router assembly and server loop for the session gate.
//!
//! Protected page routes pass through the refresh-cookie check in
//! `handlers::shell` before a single byte of page body is produced;
//! everything else is the static front end with an SPA fallback.

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
    Router,
};
use std::{fs, path::Path, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, services::ServeDir, set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;

pub mod cookie;
pub mod handlers;

/// Shared state: the application shell served for page navigations.
#[derive(Clone)]
pub struct AppState {
    shell: Arc<String>,
}

impl AppState {
    #[must_use]
    pub fn new(shell: String) -> Self {
        Self {
            shell: Arc::new(shell),
        }
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }
}

/// Build the gate router.
///
/// `/dashboard` and its subpaths are gated; `/assets` serves the compiled
/// bundles; every other path falls back to the public shell so client-side
/// routing can take over.
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/dashboard", get(handlers::shell::protected))
        .route("/dashboard/*rest", get(handlers::shell::protected))
        .nest_service("/assets", ServeDir::new(assets_dir.join("assets")))
        .fallback(handlers::shell::public)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span)),
        )
}

/// Start the server
/// # Errors
/// Return error if the shell cannot be read or the listener fails
pub async fn serve(port: u16, assets_dir: PathBuf) -> Result<()> {
    let shell_path = assets_dir.join("index.html");
    let shell = fs::read_to_string(&shell_path)
        .with_context(|| format!("Failed to read application shell: {}", shell_path.display()))?;

    let state = AppState::new(shell);
    let app = router(state, &assets_dir);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
