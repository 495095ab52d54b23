//! Entry store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::EntryRepository`].
//!
//! # Repositories
//!
//! - [`FsEntryRepository`] - One Markdown file per entry in a flat directory
//! - [`InMemoryEntryRepository`] - Ordered in-process map

pub mod fs_entry_repository;
pub mod memory_entry_repository;

pub use fs_entry_repository::FsEntryRepository;
pub use memory_entry_repository::InMemoryEntryRepository;
