//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link with its click statistics.
///
/// Records are never physically removed. A soft-deleted link keeps its row
/// (and therefore its code) but is hidden from every public operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a fresh, never-clicked link.
    pub fn new(id: i64, code: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            url,
            clicks: 0,
            last_clicked: None,
            deleted: false,
            created_at,
        }
    }

    /// Returns true if the link is visible to list, get and redirect.
    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}

/// Input data for inserting a new link.
///
/// `clicks`, `deleted` and `created_at` are always initialized by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}
