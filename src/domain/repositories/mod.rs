//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.

pub mod short_link_repository;

pub use short_link_repository::{SaveOutcome, ShortLinkRepository};

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
