//! In-memory implementation of the entry repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::is_storable_title;
use crate::domain::repositories::{EntryRepository, StorageError};

/// Entry store backed by an ordered map.
///
/// Holds nothing on disk; used by tests and for throwaway instances.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(title, content)` pairs.
    pub fn with_entries<I, T, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, C)>,
        T: Into<String>,
        C: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(title, content)| (title.into(), content.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn list_entries(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }

    async fn get_entry(&self, title: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(title).cloned())
    }

    async fn save_entry(&self, title: &str, content: &str) -> Result<(), StorageError> {
        if !is_storable_title(title) {
            return Err(StorageError::InvalidTitle(title.to_string()));
        }

        self.entries
            .write()
            .await
            .insert(title.to_string(), content.to_string());
        Ok(())
    }
}
