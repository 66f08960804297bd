//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{SaveOutcome, ShortLinkRepository};
use crate::domain::value_objects::LongUrl;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved};

/// Tunables for [`ShortenerService`], built by
/// [`Config::shortener_settings`](crate::config::Config::shortener_settings).
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Prefix of every returned short URL, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Collision retry bound.
    pub max_attempts: usize,
}

/// A code handed out by [`ShortenerService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
}

/// Service for creating and resolving short links.
///
/// Owns the business rules: URL validation, deduplication, collision retry
/// and hit counting. Holds no link state of its own; everything goes
/// through the repository.
pub struct ShortenerService<R: ShortLinkRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    settings: ShortenerSettings,
}

impl<R: ShortLinkRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(
        repository: Arc<R>,
        generator: Arc<dyn CodeGenerator>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            repository,
            generator,
            settings,
        }
    }

    /// Returns the short code for `raw`, creating one if needed.
    ///
    /// # Deduplication
    ///
    /// Shortening an already stored URL returns its existing code and leaves
    /// the hit counter alone. Concurrent callers with the same URL all
    /// observe one code, because the repository re-checks the URL inside
    /// `save`.
    ///
    /// # Code Generation
    ///
    /// Candidates come from the configured generator. Reserved codes and
    /// codes already taken count as collisions; after `max_attempts`
    /// collisions the call fails.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `raw` is not an absolute http/https URL
    /// - [`AppError::CodeGenerationExhausted`] if every attempt collided
    pub async fn shorten(&self, raw: &str) -> Result<ShortenedLink, AppError> {
        let url = LongUrl::parse(raw)?;

        if let Some(existing) = self.repository.find_by_url(&url).await? {
            debug!(code = existing.code(), "URL already shortened");
            return Ok(self.shortened(existing.code()));
        }

        let max_attempts = self.settings.max_attempts;

        for attempt in 1..=max_attempts {
            let code = self.generator.generate();

            if is_reserved(&code) {
                debug!(code = %code, attempt, "generated reserved code, retrying");
                continue;
            }

            match self
                .repository
                .save(ShortLink::new(code, url.clone()))
                .await
            {
                Ok(SaveOutcome::Created(link)) => {
                    info!(code = link.code(), url = %url, "short link created");
                    return Ok(self.shortened(link.code()));
                }
                Ok(SaveOutcome::Existing(link)) => {
                    debug!(code = link.code(), "URL stored concurrently, reusing code");
                    return Ok(self.shortened(link.code()));
                }
                Err(AppError::CodeConflict { code }) => {
                    warn!(code = %code, attempt, "short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(attempts = max_attempts, "short code space exhausted");
        Err(AppError::CodeGenerationExhausted {
            attempts: max_attempts,
        })
    }

    /// Resolves `code` to its original URL and counts the hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeNotFound`] if no link has this code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        let hits = self.repository.increment_hits(code).await?;
        debug!(code, hits, "short link resolved");

        Ok(link.original_url().as_str().to_string())
    }

    /// Returns the stored link without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeNotFound`] if no link has this code.
    pub async fn stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Number of stored links.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Builds the full short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    fn shortened(&self, code: &str) -> ShortenedLink {
        ShortenedLink {
            code: code.to_string(),
            short_url: self.short_url(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use crate::utils::code_generator::MockCodeGenerator;
    use mockall::Sequence;

    fn url(raw: &str) -> LongUrl {
        LongUrl::parse(raw).unwrap()
    }

    fn settings() -> ShortenerSettings {
        ShortenerSettings {
            base_url: "http://sho.rt/".to_string(),
            max_attempts: 3,
        }
    }

    fn service(
        repo: MockShortLinkRepository,
        generator: MockCodeGenerator,
    ) -> ShortenerService<MockShortLinkRepository> {
        ShortenerService::new(Arc::new(repo), Arc::new(generator), settings())
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();

        repo.expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));
        generator
            .expect_generate()
            .times(1)
            .returning(|| "abc123".to_string());
        repo.expect_save()
            .withf(|link| link.code() == "abc123" && link.hits() == 0)
            .times(1)
            .returning(|link| Ok(SaveOutcome::Created(link)));

        let result = service(repo, generator)
            .shorten("https://example.com")
            .await
            .unwrap();

        assert_eq!(result.code, "abc123");
        assert_eq!(result.short_url, "http://sho.rt/abc123");
    }

    #[tokio::test]
    async fn test_shorten_trims_url_before_lookup() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();

        repo.expect_find_by_url()
            .withf(|u| u.as_str() == "https://example.com/path")
            .times(1)
            .returning(|_| Ok(None));
        generator
            .expect_generate()
            .returning(|| "abc123".to_string());
        repo.expect_save()
            .withf(|link| link.original_url().as_str() == "https://example.com/path")
            .times(1)
            .returning(|link| Ok(SaveOutcome::Created(link)));

        let result = service(repo, generator)
            .shorten("  https://example.com/path\n")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_deduplication() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();

        let existing = ShortLink::new("exist1", url("https://example.com"));
        repo.expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save().times(0);
        generator.expect_generate().times(0);

        let result = service(repo, generator)
            .shorten("https://example.com")
            .await
            .unwrap();

        assert_eq!(result.code, "exist1");
    }

    #[tokio::test]
    async fn test_shorten_concurrent_insert_reuses_code() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();

        repo.expect_find_by_url().returning(|_| Ok(None));
        generator
            .expect_generate()
            .times(1)
            .returning(|| "mine01".to_string());
        let winner = ShortLink::new("theirs", url("https://example.com"));
        repo.expect_save()
            .times(1)
            .returning(move |_| Ok(SaveOutcome::Existing(winner.clone())));

        let result = service(repo, generator)
            .shorten("https://example.com")
            .await
            .unwrap();

        assert_eq!(result.code, "theirs");
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();
        let mut seq = Sequence::new();

        repo.expect_find_by_url().returning(|_| Ok(None));

        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "taken1".to_string());
        repo.expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|link| Err(AppError::conflict(link.code())));

        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "fresh1".to_string());
        repo.expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|link| Ok(SaveOutcome::Created(link)));

        let result = service(repo, generator)
            .shorten("https://example.com")
            .await
            .unwrap();

        assert_eq!(result.code, "fresh1");
    }

    #[tokio::test]
    async fn test_shorten_skips_reserved_codes() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();
        let mut seq = Sequence::new();

        repo.expect_find_by_url().returning(|_| Ok(None));
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "health".to_string());
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "ok1234".to_string());
        repo.expect_save()
            .withf(|link| link.code() == "ok1234")
            .times(1)
            .returning(|link| Ok(SaveOutcome::Created(link)));

        let result = service(repo, generator)
            .shorten("https://example.com")
            .await
            .unwrap();

        assert_eq!(result.code, "ok1234");
    }

    #[tokio::test]
    async fn test_shorten_exhausts_attempts() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();

        repo.expect_find_by_url().returning(|_| Ok(None));
        generator
            .expect_generate()
            .times(3)
            .returning(|| "same00".to_string());
        repo.expect_save()
            .times(3)
            .returning(|link| Err(AppError::conflict(link.code())));

        let result = service(repo, generator)
            .shorten("https://example.com")
            .await;

        assert!(matches!(
            result,
            Err(AppError::CodeGenerationExhausted { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut repo = MockShortLinkRepository::new();
        let mut generator = MockCodeGenerator::new();
        repo.expect_find_by_url().times(0);
        generator.expect_generate().times(0);

        let service = service(repo, generator);

        for raw in ["", "not a url", "ftp://x"] {
            let result = service.shorten(raw).await;
            assert!(
                matches!(result, Err(AppError::InvalidUrl(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_increments_hits() {
        let mut repo = MockShortLinkRepository::new();
        let generator = MockCodeGenerator::new();

        let link = ShortLink::new("abc123", url("https://example.com"));
        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));
        repo.expect_increment_hits()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(1));

        let result = service(repo, generator).resolve("abc123").await.unwrap();

        assert_eq!(result, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockShortLinkRepository::new();
        let generator = MockCodeGenerator::new();

        repo.expect_find_by_code().returning(|_| Ok(None));
        repo.expect_increment_hits().times(0);

        let result = service(repo, generator).resolve("missing").await;

        assert!(matches!(result, Err(AppError::CodeNotFound { .. })));
    }

    #[tokio::test]
    async fn test_stats_does_not_count_hit() {
        let mut repo = MockShortLinkRepository::new();
        let generator = MockCodeGenerator::new();

        let link = ShortLink::new("abc123", url("https://example.com"));
        repo.expect_find_by_code()
            .returning(move |_| Ok(Some(link.clone())));
        repo.expect_increment_hits().times(0);

        let stats = service(repo, generator).stats("abc123").await.unwrap();

        assert_eq!(stats.code(), "abc123");
        assert_eq!(stats.hits(), 0);
    }

    #[test]
    fn test_short_url_joins_without_double_slash() {
        let service = service(MockShortLinkRepository::new(), MockCodeGenerator::new());
        assert_eq!(service.short_url("xyz789"), "http://sho.rt/xyz789");
    }
}
