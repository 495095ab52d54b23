//! Markdown rendering for entry pages.
//!
//! Provides a [`MarkdownRenderer`] trait with a [`PulldownRenderer`]
//! implementation based on CommonMark.

mod pulldown;
mod renderer;

pub use pulldown::PulldownRenderer;
pub use renderer::MarkdownRenderer;

#[cfg(test)]
pub use renderer::MockMarkdownRenderer;
