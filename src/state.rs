//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::InMemoryShortLinkRepository;

/// Service wired against the in-memory repository.
pub type Shortener = ShortenerService<InMemoryShortLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>) -> Self {
        Self { shortener }
    }
}
