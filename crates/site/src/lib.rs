//! Rockets Hub Site library.
//!
//! This crate provides the site as a library, allowing the router to be
//! tested in-process and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router with its middleware stack.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            },
        ))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The site has no external
/// dependencies, so there is no separate readiness check.
async fn health() -> &'static str {
    "ok"
}
