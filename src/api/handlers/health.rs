//! Liveness endpoints.

/// Plain-text greeting served at the root.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    "Hello World!"
}

/// Health check.
///
/// # Endpoint
///
/// `GET /api/healthz`
///
/// Always answers `200 OK` with the body `OK` while the process serves requests.
pub async fn healthz_handler() -> &'static str {
    "OK"
}
