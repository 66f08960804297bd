//! URL validation and normalization.
//!
//! Normalization is deliberately light: surrounding whitespace is trimmed
//! and the result must parse as an absolute `http`/`https` URL with a
//! non-empty host. The trimmed input is kept verbatim as the dedup key;
//! redirects go out through [`parse_absolute`] so clients always receive the
//! serialized, percent-encoded form.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL: value is empty")]
    Empty,

    #[error("Invalid URL: {0}")]
    InvalidFormat(String),

    #[error("Unsupported scheme '{0}'. Only 'http' and 'https' are allowed.")]
    UnsupportedProtocol(String),

    #[error("Invalid URL: host is missing")]
    MissingHost,
}

/// Validates `input` and returns its normalized string form.
///
/// # Errors
///
/// - [`UrlNormalizationError::Empty`] for empty or whitespace-only input
/// - [`UrlNormalizationError::InvalidFormat`] when the value is not an absolute URL
/// - [`UrlNormalizationError::UnsupportedProtocol`] for schemes other than http/https
/// - [`UrlNormalizationError::MissingHost`] when the host is empty
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("  https://example.com/path \n").unwrap(),
///     "https://example.com/path"
/// );
/// assert!(normalize_url("ftp://example.com").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let url = parse_absolute(trimmed)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlNormalizationError::UnsupportedProtocol(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(trimmed.to_string())
}

/// Parses an already-trimmed value with the `url` crate.
pub fn parse_absolute(value: &str) -> Result<Url, UrlNormalizationError> {
    Url::parse(value).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))
}
