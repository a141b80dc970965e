//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, healthz_handler,
    list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /healthz`        - Health check
/// - `POST   /links`          - Create a short link
/// - `GET    /links`          - List live links
/// - `GET    /links/{code}`   - Get one live link
/// - `DELETE /links/{code}`   - Soft-delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
}
