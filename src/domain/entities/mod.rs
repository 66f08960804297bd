//! Core domain entities.
//!
//! - [`ShortLink`] - A short code mapped to its original URL plus a hit counter

pub mod short_link;

pub use short_link::ShortLink;
