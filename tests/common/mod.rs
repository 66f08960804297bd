#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::api::routes::routes;
use url_shortener::prelude::*;

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_test_state() -> (AppState, Arc<InMemoryShortLinkRepository>) {
    create_test_state_with(Arc::new(RandomCodeGenerator::new(6)), 10)
}

pub fn create_test_state_with(
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
) -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let settings = ShortenerSettings {
        base_url: TEST_BASE_URL.to_string(),
        max_attempts,
    };

    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        generator,
        settings,
    ));

    (AppState::new(shortener), repository)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(routes().with_state(state)).unwrap()
}

/// Generator that always returns the same code.
pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}
