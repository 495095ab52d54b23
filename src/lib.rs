//! # Encyclopedia
//!
//! A small wiki built with Axum: entries are Markdown documents, one per
//! title, rendered to HTML for browsing.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entries and the entry store trait
//! - **Application Layer** ([`application`]) - Listing, viewing, saving, random pick and search
//! - **Infrastructure Layer** ([`infrastructure`]) - File-system store and Markdown rendering
//! - **Web Layer** ([`web`]) - HTML pages, the entry form and the route table
//! - **API Layer** ([`api`]) - Health check and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export ENTRIES_DIR="entries"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EntryService, SearchOutcome, SubmitOutcome};
    pub use crate::domain::entities::{Entry, EntrySubmission, RenderedEntry};
    pub use crate::domain::repositories::{EntryRepository, StorageError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::markdown::{MarkdownRenderer, PulldownRenderer};
    pub use crate::infrastructure::persistence::{FsEntryRepository, InMemoryEntryRepository};
    pub use crate::state::AppState;
}
