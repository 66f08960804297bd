//! Domain layer containing business entities and contracts.
//!
//! - [`value_objects`] - Validated, immutable values ([`value_objects::LongUrl`])
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod value_objects;
