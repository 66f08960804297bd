//! API route configuration.

use crate::api::handlers::{
    health_handler, index_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET  /`              - Usage instructions
/// - `GET  /health`        - Health check
/// - `POST /shorten`       - Create (or look up) a short code for a URL
/// - `GET  /stats/{code}`  - Stored link and hit count
/// - `GET  /{code}`        - Redirect to the original URL
///
/// Static segments take precedence over `/{code}`, which is why generated
/// codes must never equal a reserved name.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
