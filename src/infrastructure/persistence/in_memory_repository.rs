//! In-memory implementation of the short link repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{SaveOutcome, ShortLinkRepository};
use crate::domain::value_objects::LongUrl;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    by_code: HashMap<String, ShortLink>,
    /// Normalized URL to code.
    by_url: HashMap<LongUrl, String>,
}

impl Store {
    fn link_for_url(&self, url: &LongUrl) -> Option<&ShortLink> {
        self.by_url
            .get(url)
            .and_then(|code| self.by_code.get(code))
    }
}

/// Process-local link store.
///
/// Both indexes sit behind a single lock, so the URL dedup check and the
/// insert in [`ShortLinkRepository::save`] form one critical section.
/// Locks are never held across an `.await` other than their acquisition.
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryShortLinkRepository {
    store: RwLock<Store>,
}

impl InMemoryShortLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let store = self.store.read().await;
        Ok(store.by_code.get(code).cloned())
    }

    async fn find_by_url(&self, url: &LongUrl) -> Result<Option<ShortLink>, AppError> {
        let store = self.store.read().await;
        Ok(store.link_for_url(url).cloned())
    }

    async fn save(&self, link: ShortLink) -> Result<SaveOutcome, AppError> {
        let mut store = self.store.write().await;

        if let Some(existing) = store.link_for_url(link.original_url()) {
            debug!(code = existing.code(), "URL already stored, skipping insert");
            return Ok(SaveOutcome::Existing(existing.clone()));
        }

        if store.by_code.contains_key(link.code()) {
            return Err(AppError::conflict(link.code()));
        }

        store
            .by_url
            .insert(link.original_url().clone(), link.code().to_string());
        store.by_code.insert(link.code().to_string(), link.clone());

        Ok(SaveOutcome::Created(link))
    }

    async fn increment_hits(&self, code: &str) -> Result<u64, AppError> {
        let mut store = self.store.write().await;

        store
            .by_code
            .get_mut(code)
            .map(ShortLink::record_hit)
            .ok_or_else(|| AppError::not_found(code))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.read().await.by_code.len())
    }
}
