//! Core domain entities.
//!
//! - [`Entry`] - A titled Markdown document as held by the store
//! - [`EntrySubmission`] - A validated create-or-edit request
//! - [`RenderedEntry`] - An entry whose content has been converted to HTML

pub mod entry;

pub use entry::{Entry, EntrySubmission, MAX_TITLE_BYTES, RenderedEntry, is_storable_title};
