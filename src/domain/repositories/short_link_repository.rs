//! Repository trait for short link storage.

use crate::domain::entities::ShortLink;
use crate::domain::value_objects::LongUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of a successful [`ShortLinkRepository::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The link was inserted as given.
    Created(ShortLink),
    /// The URL was already stored under another code; nothing was inserted.
    Existing(ShortLink),
}

impl SaveOutcome {
    pub fn link(&self) -> &ShortLink {
        match self {
            SaveOutcome::Created(link) | SaveOutcome::Existing(link) => link,
        }
    }

    pub fn into_link(self) -> ShortLink {
        match self {
            SaveOutcome::Created(link) | SaveOutcome::Existing(link) => link,
        }
    }
}

/// Storage contract for short links.
///
/// All methods must be safe to call concurrently. Returned links are
/// snapshots; the repository owns the stored entities.
///
/// # Invariants
///
/// - `code` is unique among stored links
/// - at most one link exists per normalized URL
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds the link stored for a normalized URL.
    async fn find_by_url(&self, url: &LongUrl) -> Result<Option<ShortLink>, AppError>;

    /// Inserts a new link.
    ///
    /// The URL check and the insert happen in one critical section: if the
    /// URL is already stored, the existing link is returned as
    /// [`SaveOutcome::Existing`] and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken. The
    /// store is left untouched.
    async fn save(&self, link: ShortLink) -> Result<SaveOutcome, AppError>;

    /// Atomically increments the hit counter and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeNotFound`] if the code is absent.
    async fn increment_hits(&self, code: &str) -> Result<u64, AppError>;

    /// Number of stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
