//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::parse_absolute;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Every successful redirect increments the link's hit counter exactly once.
///
/// # Response
///
/// 302 Found with `Location` set to the original URL in its serialized,
/// percent-encoded form.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "not found"}` if the code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shortener.resolve(&code).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, location_header(&original_url)?)],
    ))
}

/// Builds the `Location` value from the serialized form of the stored URL.
///
/// The serialization is absolute and percent-encoded, so forms like
/// `http:example.com` or raw non-ASCII paths never reach the client as-is.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    let invalid = || AppError::InvalidRedirectTarget {
        url: original_url.to_string(),
    };

    let url = parse_absolute(original_url).map_err(|_| invalid())?;
    HeaderValue::from_str(url.as_str()).map_err(|_| invalid())
}
