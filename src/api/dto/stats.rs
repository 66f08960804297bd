//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Stored state of a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub hits: u64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for StatsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_code: link.code().to_string(),
            original_url: link.original_url().to_string(),
            hits: link.hits(),
            created_at: link.created_at(),
        }
    }
}
