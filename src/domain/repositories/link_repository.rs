//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for link records.
///
/// The store is the sole owner of link state. Implementations must enforce
/// code uniqueness atomically: two concurrent [`insert_if_absent`] calls with
/// the same code must produce exactly one success.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// [`insert_if_absent`]: LinkRepository::insert_if_absent
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code, regardless of its deletion state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with `clicks = 0`, `deleted = false` and
    /// `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if any record (live or deleted) already
    /// uses the code.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Atomically adds one click to a live link and stamps `last_clicked`.
    ///
    /// `last_clicked` never moves backwards. Returns `Ok(false)` if no live
    /// link matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Marks a live link as deleted.
    ///
    /// Returns `Ok(true)` if the link was found and deleted, `Ok(false)` if not
    /// found or already deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn soft_delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists live links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_live(&self) -> Result<Vec<Link>, AppError>;

    /// Lists every stored link including deleted ones, newest first.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Clears the deleted flag. Returns `Ok(false)` if no deleted link matched.
    async fn restore(&self, code: &str) -> Result<bool, AppError>;
}
