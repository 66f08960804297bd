//! Utility functions for code generation and URL processing.
//!
//! - [`base62`] - Base62 encoding and decoding
//! - [`code_generator`] - Short code generation strategies
//! - [`url_normalizer`] - URL validation and normalization

pub mod base62;
pub mod code_generator;
pub mod url_normalizer;
