//! Markdown renderer trait.

/// Converts raw Markdown text to HTML.
///
/// Implementations must be pure and total: the same input always yields the
/// same output and rendering never fails.
///
/// # Implementations
///
/// - [`crate::infrastructure::markdown::PulldownRenderer`] - CommonMark with common extensions
#[cfg_attr(test, mockall::automock)]
pub trait MarkdownRenderer: Send + Sync {
    /// Renders `markdown` to an HTML fragment.
    fn render(&self, markdown: &str) -> String;
}
