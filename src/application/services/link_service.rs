//! Link registry: creation, resolution, listing and soft deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::location::encode_location;
use serde_json::json;
use tracing::{debug, warn};

/// Maximum number of random codes tried before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving and retiring short links.
///
/// Holds no mutable state of its own; every operation goes straight to the
/// repository, so one instance is shared by all requests.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// An empty `custom_code` is treated as absent and a code is generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or the custom code
    /// is malformed.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already used by any
    /// record, deleted ones included.
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request("URL is required", json!({})));
        }

        let code = self
            .allocate_code(custom_code.filter(|c| !c.is_empty()))
            .await?;

        // The store's unique constraint still rejects a code taken concurrently.
        let link = self
            .link_repository
            .insert_if_absent(NewLink { code, url })
            .await?;

        debug!(code = %link.code, "Link created");
        Ok(link)
    }

    /// Resolves a code to its redirect location and records the click.
    ///
    /// The stored URL is percent-encoded where needed, so the returned value
    /// is always a valid `Location` header. A failure to record the click is
    /// logged and does not fail the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or deleted.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self.get_link(code).await?;
        let location = encode_location(&link.url).into_owned();

        match self.link_repository.increment_clicks(code).await {
            Ok(true) => {}
            Ok(false) => debug!(code, "Link was deleted before the click was recorded"),
            Err(e) => warn!(code, error = %e, "Failed to record click"),
        }

        Ok(location)
    }

    /// Lists live links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_live().await
    }

    /// Retrieves a live link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or deleted.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .filter(Link::is_live)
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Soft-deletes a live link.
    ///
    /// Deleting twice is reported as [`AppError::NotFound`] the second time.
    pub async fn soft_delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.link_repository.soft_delete(code).await? {
            debug!(code, "Link soft-deleted");
            Ok(())
        } else {
            Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Picks the code for a new link.
    ///
    /// Custom codes are validated and must not exist in any deletion state.
    /// Without one, a random code is generated.
    async fn allocate_code(&self, custom_code: Option<String>) -> Result<String, AppError> {
        let Some(custom) = custom_code else {
            return self.generate_unique_code().await;
        };

        validate_custom_code(&custom)?;

        if self
            .link_repository
            .find_by_code(&custom)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Custom code already in use",
                json!({ "code": custom }),
            ));
        }

        Ok(custom)
    }

    /// Generates a code not used by any record, retrying on collision.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            debug!(code, attempt, "Generated code collided, retrying");
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
