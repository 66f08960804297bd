//! Handler for the service landing page.

use axum::Json;

use crate::api::dto::index::{IndexResponse, Instructions};

/// Describes how to use the service.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "URL Shortener Service",
        instructions: Instructions {
            shorten: "Send POST /shorten with JSON {\"url\": \"https://example.com\"}",
            redirect: "Navigate to /<code> to be redirected",
            stats: "GET /stats/<code> to see the hit count",
        },
    })
}
