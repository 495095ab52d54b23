//! File-system implementation of the entry repository.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::is_storable_title;
use crate::domain::repositories::{EntryRepository, StorageError};

/// File extension of entry documents.
const ENTRY_EXTENSION: &str = ".md";

/// Entry store keeping one `<title>.md` file per entry in a flat directory.
///
/// Writes go to a uniquely named temporary sibling file that is then renamed
/// over the target, so a save either completes or leaves the previous content
/// intact. Concurrent saves of one title each rename their own file; the last
/// rename wins.
pub struct FsEntryRepository {
    root: PathBuf,
}

impl FsEntryRepository {
    /// Creates a repository over an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a repository, creating the directory first if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| StorageError::io(&root, e))?;
        info!("Entry store opened at {}", root.display());
        Ok(Self { root })
    }

    /// Returns the directory holding the entry files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        self.root.join(format!("{title}{ENTRY_EXTENSION}"))
    }

    fn staging_path(&self) -> PathBuf {
        self.root
            .join(format!(".entry-{}{ENTRY_EXTENSION}.tmp", Uuid::new_v4()))
    }
}

#[async_trait]
impl EntryRepository for FsEntryRepository {
    async fn list_entries(&self) -> Result<Vec<String>, StorageError> {
        let mut dir = fs::read_dir(&self.root)
            .await
            .map_err(|e| StorageError::io(&self.root, e))?;

        let mut titles = Vec::new();
        while let Some(item) = dir
            .next_entry()
            .await
            .map_err(|e| StorageError::io(&self.root, e))?
        {
            let file_name = item.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(title) = name.strip_suffix(ENTRY_EXTENSION)
                && is_storable_title(title)
            {
                titles.push(title.to_string());
            }
        }

        titles.sort();
        Ok(titles)
    }

    async fn get_entry(&self, title: &str) -> Result<Option<String>, StorageError> {
        if !is_storable_title(title) {
            debug!("Lookup of unstorable title {:?}", title);
            return Ok(None);
        }

        let path = self.entry_path(title);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidFilename) => {
                Ok(None)
            }
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    async fn save_entry(&self, title: &str, content: &str) -> Result<(), StorageError> {
        if !is_storable_title(title) {
            return Err(StorageError::InvalidTitle(title.to_string()));
        }

        let staging = self.staging_path();
        let path = self.entry_path(title);

        fs::write(&staging, content)
            .await
            .map_err(|e| StorageError::io(&staging, e))?;

        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(StorageError::io(path, e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nested").join("entries");

        let repo = FsEntryRepository::open(&root).await.unwrap();

        assert!(root.is_dir());
        assert_eq!(repo.root(), root.as_path());
    }

    #[tokio::test]
    async fn test_list_ignores_non_markdown_and_staging_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("Python.md"), "py").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "txt").unwrap();
        std::fs::write(tmp.path().join(".Draft.md.tmp"), "tmp").unwrap();
        std::fs::write(tmp.path().join(".hidden.md"), "hidden").unwrap();

        let repo = FsEntryRepository::new(tmp.path());
        let titles = repo.list_entries().await.unwrap();

        assert_eq!(titles, vec!["Python".to_string()]);
    }

    #[tokio::test]
    async fn test_save_leaves_no_staging_file() {
        let tmp = TempDir::new().unwrap();
        let repo = FsEntryRepository::new(tmp.path());

        repo.save_entry("Rust", "# Rust").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Rust.md".to_string()]);
    }

    #[tokio::test]
    async fn test_get_unstorable_title_is_absent() {
        let tmp = TempDir::new().unwrap();
        let repo = FsEntryRepository::new(tmp.path().join("wiki"));
        std::fs::create_dir(tmp.path().join("wiki")).unwrap();
        std::fs::write(tmp.path().join("secret.md"), "outside").unwrap();

        let result = repo.get_entry("../secret").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_save_unstorable_title_fails() {
        let tmp = TempDir::new().unwrap();
        let repo = FsEntryRepository::new(tmp.path());

        let result = repo.save_entry("a/b", "content").await;

        assert!(matches!(result, Err(StorageError::InvalidTitle(_))));
    }

    #[tokio::test]
    async fn test_get_over_long_title_is_absent() {
        let tmp = TempDir::new().unwrap();
        let repo = FsEntryRepository::new(tmp.path());

        let result = repo.get_entry(&"a".repeat(300)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_save_longest_title() {
        let tmp = TempDir::new().unwrap();
        let repo = FsEntryRepository::new(tmp.path());
        let title = "a".repeat(crate::domain::entities::MAX_TITLE_BYTES);

        repo.save_entry(&title, "long").await.unwrap();

        assert_eq!(repo.get_entry(&title).await.unwrap().as_deref(), Some("long"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_of_one_title() {
        let tmp = TempDir::new().unwrap();
        let repo = std::sync::Arc::new(FsEntryRepository::new(tmp.path()));

        for round in 0..100 {
            let first = format!("first {round}");
            let second = format!("second {round}");

            let a = tokio::spawn({
                let repo = repo.clone();
                let content = first.clone();
                async move { repo.save_entry("Race", &content).await }
            });
            let b = tokio::spawn({
                let repo = repo.clone();
                let content = second.clone();
                async move { repo.save_entry("Race", &content).await }
            });

            a.await.unwrap().unwrap();
            b.await.unwrap().unwrap();

            let stored = repo.get_entry("Race").await.unwrap().unwrap();
            assert!(stored == first || stored == second, "torn write: {stored}");
        }

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Race.md".to_string()]);
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let repo = FsEntryRepository::new(tmp.path().join("missing"));

        let result = repo.list_entries().await;

        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
