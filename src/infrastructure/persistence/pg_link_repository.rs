//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, code, url, clicks, last_clicked, deleted, created_at";

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    url: String,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    deleted: bool,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            url: row.url,
            clicks: row.clicks,
            last_clicked: row.last_clicked,
            deleted: row.deleted,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is guaranteed by the `links_code_key` constraint, so
/// [`LinkRepository::insert_if_absent`] needs no application-level locking.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert_if_absent(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (code, url) VALUES ($1, $2) RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.code)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        // GREATEST skips NULL, so the first click simply takes NOW().
        let result = sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1,
                last_clicked = GREATEST(last_clicked, NOW())
            WHERE code = $1 AND deleted = FALSE
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE links SET deleted = TRUE WHERE code = $1 AND deleted = FALSE")
                .bind(code)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_live(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE deleted = FALSE
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn restore(&self, code: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE links SET deleted = FALSE WHERE code = $1 AND deleted = TRUE")
                .bind(code)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
