//! Hosting layer for the delve engine.
//!
//! `delve-runtime` wraps the pure engine with everything a host needs:
//! character identifiers and timestamps, pluggable persistence behind
//! [`CharacterRepository`], and a [`GameService`] that serializes
//! concurrent actions per character while letting different characters
//! proceed in parallel.

pub mod error;
pub mod repository;
pub mod service;

pub use error::{Result, RuntimeError};
pub use repository::{CharacterRepository, FileCharacterRepository, MemoryCharacterRepository};
pub use service::GameService;
