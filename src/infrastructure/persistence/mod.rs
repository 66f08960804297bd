//! Repository implementations.
//!
//! - [`InMemoryShortLinkRepository`] - Process-local storage behind a single lock

pub mod in_memory_repository;

pub use in_memory_repository::InMemoryShortLinkRepository;
