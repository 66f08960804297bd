//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Prefix of returned short URLs (default: `http://localhost:8000`)
//! - `CODE_STRATEGY` - `random`, `sequential` or `hash` (default: `random`)
//! - `CODE_LENGTH` - Generated code length, 6-8 (default: 6)
//! - `MAX_CODE_ATTEMPTS` - Collision retry bound, 1-100 (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::application::services::ShortenerSettings;
use crate::utils::code_generator::CodeStrategy;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CODE_LENGTH: usize = 6;
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 10;

const MIN_CODE_LENGTH: usize = 6;
const MAX_CODE_LENGTH: usize = 8;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub code_strategy: CodeStrategy,
    pub code_length: usize,
    pub max_code_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            code_strategy: CodeStrategy::default(),
            code_length: DEFAULT_CODE_LENGTH,
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or strategy variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let code_strategy = parse_var("CODE_STRATEGY", defaults.code_strategy)?;
        let code_length = parse_var("CODE_LENGTH", defaults.code_length)?;
        let max_code_attempts = parse_var("MAX_CODE_ATTEMPTS", defaults.max_code_attempts)?;

        Ok(Self {
            listen_addr,
            base_url,
            code_strategy,
            code_length,
            max_code_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `base_url` is not an http/https URL
    /// - `code_length` is outside 6-8
    /// - `max_code_attempts` is outside 1-100
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })?;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.max_code_attempts == 0 || self.max_code_attempts > 100 {
            anyhow::bail!(
                "MAX_CODE_ATTEMPTS must be between 1 and 100, got {}",
                self.max_code_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Settings handed to the shortener service.
    pub fn shortener_settings(&self) -> ShortenerSettings {
        ShortenerSettings {
            base_url: self.base_url.clone(),
            max_attempts: self.max_code_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Code strategy: {} (length {}, {} attempts)",
            self.code_strategy,
            self.code_length,
            self.max_code_attempts
        );
        tracing::info!("  Storage: in-memory");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads `name` and parses it, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} is invalid ('{raw}'): {e}")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
