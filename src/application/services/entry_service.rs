//! Wiki entry service: listing, viewing, saving, random pick and search.

use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{Entry, EntrySubmission, RenderedEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::infrastructure::markdown::MarkdownRenderer;

/// Result of a create-or-edit submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The entry was written; the caller should show it.
    Saved { title: String },
    /// An entry with this title exists and the submission was not an edit.
    /// Nothing was written.
    AlreadyExists { submission: EntrySubmission },
}

/// Result of a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was the empty string.
    EmptyQuery,
    /// The query is exactly the title of an entry.
    ExactMatch { title: String },
    /// No title contains the query.
    NoResults { query: String },
    /// Titles containing the query, case-insensitively, in store order.
    Matches { query: String, titles: Vec<String> },
}

/// Service orchestrating the entry store and the Markdown renderer.
///
/// Holds no per-request state; a single instance is shared by all handlers.
pub struct EntryService {
    repository: Arc<dyn EntryRepository>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl EntryService {
    /// Creates a new entry service.
    pub fn new(repository: Arc<dyn EntryRepository>, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    /// Lists every entry title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be listed.
    pub async fn list_titles(&self) -> Result<Vec<String>, AppError> {
        Ok(self.repository.list_entries().await?)
    }

    /// Fetches an entry by exact title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read failure. A missing entry is `Ok(None)`.
    pub async fn get_entry(&self, title: &str) -> Result<Option<Entry>, AppError> {
        let content = self.repository.get_entry(title).await?;
        Ok(content.map(|content| Entry::new(title, content)))
    }

    /// Fetches an entry and renders its content to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read failure. A missing entry is `Ok(None)`.
    pub async fn render_entry(&self, title: &str) -> Result<Option<RenderedEntry>, AppError> {
        let Some(entry) = self.get_entry(title).await? else {
            debug!("Entry {:?} not found", title);
            return Ok(None);
        };

        Ok(Some(RenderedEntry {
            html: self.renderer.render(&entry.content),
            title: entry.title,
        }))
    }

    /// Renders arbitrary Markdown with the configured renderer.
    pub fn render_markdown(&self, markdown: &str) -> String {
        self.renderer.render(markdown)
    }

    /// Creates or edits an entry.
    ///
    /// A new title is always written. An existing title is overwritten only
    /// when the submission carries the edit flag; otherwise the store is left
    /// untouched and [`SubmitOutcome::AlreadyExists`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read or write failure.
    pub async fn submit(&self, submission: EntrySubmission) -> Result<SubmitOutcome, AppError> {
        let exists = self.repository.get_entry(&submission.title).await?.is_some();

        if exists && !submission.edit {
            debug!("Refusing to overwrite existing entry {:?}", submission.title);
            return Ok(SubmitOutcome::AlreadyExists { submission });
        }

        self.repository
            .save_entry(&submission.title, &submission.content)
            .await?;

        if exists {
            info!(title = %submission.title, "Entry updated");
        } else {
            info!(title = %submission.title, "Entry created");
        }

        Ok(SubmitOutcome::Saved {
            title: submission.title,
        })
    }

    /// Picks a title uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyWiki`] if the store has no entries and
    /// [`AppError::Storage`] if it cannot be listed.
    pub async fn random_title(&self) -> Result<String, AppError> {
        let titles = self.repository.list_entries().await?;

        titles
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(AppError::EmptyWiki)
    }

    /// Searches entry titles.
    ///
    /// An empty query short-circuits without touching the store. A query
    /// equal to an existing title is an exact match; otherwise every title
    /// containing the query, ignoring case, is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read failure.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, AppError> {
        if query.is_empty() {
            return Ok(SearchOutcome::EmptyQuery);
        }

        if self.repository.get_entry(query).await?.is_some() {
            return Ok(SearchOutcome::ExactMatch {
                title: query.to_string(),
            });
        }

        let titles: Vec<String> = self
            .repository
            .list_entries()
            .await?
            .into_iter()
            .filter(|title| title_matches(title, query))
            .collect();

        debug!("Search {:?} matched {} titles", query, titles.len());

        if titles.is_empty() {
            Ok(SearchOutcome::NoResults {
                query: query.to_string(),
            })
        } else {
            Ok(SearchOutcome::Matches {
                query: query.to_string(),
                titles,
            })
        }
    }
}

/// Case-insensitive containment of `query` in `title`, by uppercasing both.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_uppercase().contains(&query.to_uppercase())
}
