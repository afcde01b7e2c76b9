//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Static status message (public)
//! - `GET  /health`       - Health check (public)
//! - `/api/v1/books*`     - Book resource (`X-API-Key` required)
//!
//! Trailing slashes are trimmed before routing, so `/api/v1/books/` and
//! `/api/v1/books` reach the same handler.

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
