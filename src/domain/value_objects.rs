//! Immutable value objects of the shortener domain.

use std::fmt;

use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};

/// A validated absolute `http`/`https` URL.
///
/// Equality is by normalized string value, which is also the key used for
/// deduplication. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LongUrl(String);

impl LongUrl {
    /// Validates and normalizes `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlNormalizationError`] if the value is empty, unparseable,
    /// uses a scheme other than http/https, or has no host.
    pub fn parse(raw: &str) -> Result<Self, UrlNormalizationError> {
        normalize_url(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LongUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
