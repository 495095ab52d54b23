//! Repository trait for wiki entry storage.

use async_trait::async_trait;
use std::path::PathBuf;

/// Errors reported by an entry store.
///
/// A missing entry is not an error: lookups return `Ok(None)` instead.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Title cannot be stored: {0:?}")]
    InvalidTitle(String),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Key-value store of entry titles and their Markdown content.
///
/// No locking or versioning is provided: concurrent saves of the same title
/// race and the last writer wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FsEntryRepository`] - Markdown files in a directory
/// - [`crate::infrastructure::persistence::InMemoryEntryRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_fs.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Lists all entry titles in ascending order, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the store cannot be enumerated.
    async fn list_entries(&self) -> Result<Vec<String>, StorageError>;

    /// Fetches the content of the entry with exactly this title.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(content))` if found
    /// - `Ok(None)` if no entry has this title
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the entry exists but cannot be read.
    async fn get_entry(&self, title: &str) -> Result<Option<String>, StorageError>;

    /// Creates the entry, or replaces its content entirely if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidTitle`] if the title cannot name an entry
    /// and [`StorageError::Io`] if the write fails. Failures are never retried.
    async fn save_entry(&self, title: &str, content: &str) -> Result<(), StorageError>;
}
