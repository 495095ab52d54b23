//! Entry entity representing one wiki page.

/// A wiki entry: a unique title and its raw Markdown content.
///
/// Titles are case-preserving and compared case-sensitively for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub content: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// An entry whose Markdown content has been rendered to HTML for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub title: String,
    pub html: String,
}

/// A validated create-or-edit submission.
///
/// Produced by [`crate::web::dto::entry_form::EntryForm::into_submission`];
/// both `title` and `content` are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySubmission {
    pub title: String,
    pub content: String,
    /// When set, an existing entry with the same title is overwritten
    /// instead of being reported as a duplicate.
    pub edit: bool,
}

impl EntrySubmission {
    pub fn new(title: impl Into<String>, content: impl Into<String>, edit: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            edit,
        }
    }
}

/// Longest title, in bytes, that still names a file: 255 minus the `.md`
/// extension.
pub const MAX_TITLE_BYTES: usize = 252;

/// Returns true if `title` can be used as an entry identifier.
///
/// A title names a document in the store, so it must be non-empty, at most
/// [`MAX_TITLE_BYTES`] long, must not contain path separators or control
/// characters, and must not start with a dot.
pub fn is_storable_title(title: &str) -> bool {
    !title.is_empty()
        && title.len() <= MAX_TITLE_BYTES
        && !title.starts_with('.')
        && !title
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
}
