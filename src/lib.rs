//! # URL Shortener
//!
//! Maps long URLs to short base62 codes and redirects short codes back to
//! the original URL, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL value object, short link entity, repository trait
//! - **Application Layer** ([`application`]) - Shortening and resolution rules
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random, sequential and hash-based code strategies
//! - Deduplication: one code per normalized URL, race-free under concurrency
//! - Bounded collision retry
//! - Per-link hit counter
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000"   # Optional
//! cargo run
//!
//! curl -X POST localhost:8000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenerService, ShortenerSettings};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{SaveOutcome, ShortLinkRepository};
    pub use crate::domain::value_objects::LongUrl;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryShortLinkRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{
        CodeGenerator, RandomCodeGenerator, SequentialCodeGenerator,
    };
}
