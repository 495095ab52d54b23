//! Repository trait definitions for the domain layer.
//!
//! The entry store is abstracted behind [`EntryRepository`] so handlers and
//! services never touch the file system directly.
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence::FsEntryRepository` - one Markdown file per entry
//! - `crate::infrastructure::persistence::InMemoryEntryRepository` - map-backed, for tests
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod entry_repository;

pub use entry_repository::{EntryRepository, StorageError};

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
