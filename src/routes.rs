//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Liveness text
//! - `GET  /{code}`   - Short link redirect
//! - `/api/*`         - REST API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{redirect_handler, root_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware but without path
/// normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/api/links/` and
/// `/api/links` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
