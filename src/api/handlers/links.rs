//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "code": "my-link"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "code": "k3v91x",
///   "url": "https://example.com",
///   "clicks": 0,
///   "lastClicked": null,
///   "deleted": false,
///   "createdAt": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or the custom code is malformed.
/// Returns 409 Conflict if the custom code was ever used, even by a deleted link.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.code)
        .await?;

    tracing::info!(code = %link.code, "Short link created");

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists live links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single live link with its click statistics.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the link was deleted.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// - The record is **not** removed from storage; it is flagged as deleted.
/// - The code stays reserved and can never be reused.
/// - Get, list and redirect treat the link as absent afterwards.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or is already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.soft_delete_link(&code).await?;

    tracing::info!(code, "Short link deleted");

    Ok(StatusCode::NO_CONTENT)
}
