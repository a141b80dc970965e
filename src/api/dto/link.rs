//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// A missing `url` deserializes to an empty string so that it is reported
/// by validation rather than as a JSON parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Optional custom short code.
    #[serde(default)]
    pub code: Option<String>,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            deleted: link.deleted,
            created_at: link.created_at,
        }
    }
}
