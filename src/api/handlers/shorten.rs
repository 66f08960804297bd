//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aZ3k9Q",
///   "short_url": "http://localhost:8000/aZ3k9Q"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing, or
/// the URL is invalid. Returns 500 if no unique code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected shorten body");
        AppError::bad_request("Invalid JSON body")
    })?;

    payload.validate()?;
    let url = payload.url.unwrap_or_default();

    let link = state.shortener.shorten(&url).await?;

    Ok(Json(ShortenResponse {
        short_code: link.code,
        short_url: link.short_url,
    }))
}
