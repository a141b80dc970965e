//! CORS middleware.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The API carries no credentials, so browser front-ends hosted anywhere may
/// call it directly.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
