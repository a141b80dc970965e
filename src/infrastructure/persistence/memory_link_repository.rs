//! In-process link repository.
//!
//! Backs the service when no database is configured and serves as the store
//! for handler tests. Contents are lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    next_id: i64,
}

/// Link store held in memory behind a single lock.
///
/// The uniqueness check and the insert happen under the same write guard,
/// which gives the same guarantee as a unique constraint.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut links: Vec<Link>) -> Vec<Link> {
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        links
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.links.get(code).cloned())
    }

    async fn insert_if_absent(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already in use",
                json!({ "code": new_link.code }),
            ));
        }

        inner.next_id += 1;
        let link = Link::new(inner.next_id, new_link.code, new_link.url, Utc::now());
        inner.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        match inner.links.get_mut(code) {
            Some(link) if link.is_live() => {
                let now = Utc::now();
                link.clicks += 1;
                link.last_clicked = Some(link.last_clicked.map_or(now, |prev| prev.max(now)));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        match inner.links.get_mut(code) {
            Some(link) if link.is_live() => {
                link.deleted = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_live(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;
        let live = inner
            .links
            .values()
            .filter(|link| link.is_live())
            .cloned()
            .collect();

        Ok(Self::newest_first(live))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(Self::newest_first(inner.links.values().cloned().collect()))
    }

    async fn restore(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        match inner.links.get_mut(code) {
            Some(link) if link.deleted => {
                link.deleted = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_initializes_counters() {
        let repo = InMemoryLinkRepository::new();

        let link = repo
            .insert_if_absent(new_link("abc", "https://a.com"))
            .await
            .unwrap();

        assert_eq!(link.clicks, 0);
        assert!(!link.deleted);
        assert!(link.last_clicked.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_conflicts() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("abc", "https://a.com"))
            .await
            .unwrap();

        let result = repo.insert_if_absent(new_link("abc", "https://b.com")).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

        let stored = repo.find_by_code("abc").await.unwrap().unwrap();
        assert_eq!(stored.url, "https://a.com");
    }

    #[tokio::test]
    async fn test_deleted_code_is_not_reusable() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("abc", "https://a.com"))
            .await
            .unwrap();
        assert!(repo.soft_delete("abc").await.unwrap());

        let result = repo.insert_if_absent(new_link("abc", "https://b.com")).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_single_winner() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert_if_absent(new_link("race", &format!("https://{i}.com")))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_increment_clicks_live_only() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("abc", "https://a.com"))
            .await
            .unwrap();

        assert!(repo.increment_clicks("abc").await.unwrap());
        let first = repo.find_by_code("abc").await.unwrap().unwrap();
        assert!(repo.increment_clicks("abc").await.unwrap());
        let second = repo.find_by_code("abc").await.unwrap().unwrap();

        assert_eq!(second.clicks, 2);
        assert!(second.last_clicked >= first.last_clicked);

        repo.soft_delete("abc").await.unwrap();
        assert!(!repo.increment_clicks("abc").await.unwrap());
        assert!(!repo.increment_clicks("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_soft_delete_twice() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("abc", "https://a.com"))
            .await
            .unwrap();

        assert!(repo.soft_delete("abc").await.unwrap());
        assert!(!repo.soft_delete("abc").await.unwrap());

        let stored = repo.find_by_code("abc").await.unwrap().unwrap();
        assert!(stored.deleted);
    }

    #[tokio::test]
    async fn test_list_live_newest_first() {
        let repo = InMemoryLinkRepository::new();
        for code in ["one", "two", "three"] {
            repo.insert_if_absent(new_link(code, "https://a.com"))
                .await
                .unwrap();
        }
        repo.soft_delete("two").await.unwrap();

        let codes: Vec<String> = repo
            .list_live()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["three", "one"]);

        assert_eq!(repo.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_restore() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("abc", "https://a.com"))
            .await
            .unwrap();

        assert!(!repo.restore("abc").await.unwrap());
        repo.soft_delete("abc").await.unwrap();
        assert!(repo.restore("abc").await.unwrap());
        assert!(repo.find_by_code("abc").await.unwrap().unwrap().is_live());
    }
}
