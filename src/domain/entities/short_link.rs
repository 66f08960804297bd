//! Short link entity binding a code to its original URL.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::LongUrl;

/// A stored mapping from short code to original URL.
///
/// Identity is the `code`. Code, URL and creation time are fixed at
/// construction; only the hit counter changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    code: String,
    original_url: LongUrl,
    hits: u64,
    created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a link with zero hits, timestamped now.
    pub fn new(code: impl Into<String>, original_url: LongUrl) -> Self {
        Self {
            code: code.into(),
            original_url,
            hits: 0,
            created_at: Utc::now(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn original_url(&self) -> &LongUrl {
        &self.original_url
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Counts one successful resolve and returns the new total.
    pub fn record_hit(&mut self) -> u64 {
        self.hits = self.hits.saturating_add(1);
        self.hits
    }
}
