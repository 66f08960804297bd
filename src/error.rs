//! Crate-wide error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]. Handlers rely on the [`IntoResponse`]
//! impl to turn it into a status code plus a `{"error": "..."}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::url_normalizer::UrlNormalizationError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is empty, unparseable, or not http/https.
    #[error(transparent)]
    InvalidUrl(#[from] UrlNormalizationError),

    /// The request body is malformed (missing field, not JSON).
    #[error("{message}")]
    Validation { message: String },

    /// A generated code is already stored. Absorbed by the service's retry loop.
    #[error("Short code '{code}' is already taken")]
    CodeConflict { code: String },

    /// Every retry attempt produced a colliding code.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    CodeGenerationExhausted { attempts: usize },

    #[error("No URL mapping found for code '{code}'")]
    CodeNotFound { code: String },

    /// A stored URL could not be serialized into a `Location` header.
    #[error("Stored URL '{url}' is not a valid redirect target")]
    InvalidRedirectTarget { url: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::CodeNotFound { code: code.into() }
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::CodeConflict { code: code.into() }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::CodeConflict { .. }
            | AppError::CodeGenerationExhausted { .. }
            | AppError::InvalidRedirectTarget { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to HTTP clients.
    ///
    /// Lookups of unknown codes always answer with a bare `"not found"`.
    pub fn public_message(&self) -> String {
        match self {
            AppError::CodeNotFound { .. } => "not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request body".to_string());

        AppError::bad_request(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidUrl(UrlNormalizationError::Empty).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::bad_request("Missing 'url' in request body").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("abc123").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CodeGenerationExhausted { attempts: 10 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::conflict("abc123").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::InvalidRedirectTarget {
                url: "http:".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_is_generic() {
        let err = AppError::not_found("secret");
        assert_eq!(err.public_message(), "not found");
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn test_invalid_url_message_passes_through() {
        let err = AppError::from(UrlNormalizationError::UnsupportedProtocol("ftp".to_string()));
        assert!(err.public_message().contains("ftp"));
    }

    #[test]
    fn test_exhausted_message_mentions_attempts() {
        let err = AppError::CodeGenerationExhausted { attempts: 10 };
        assert!(err.public_message().contains("10 attempts"));
    }
}
