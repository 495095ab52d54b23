//! CommonMark renderer built on pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

use super::renderer::MarkdownRenderer;

/// Renders CommonMark with tables, strikethrough, footnotes and task lists.
///
/// Raw HTML in the source is passed through unchanged; the wiki serves a
/// trusted audience.
#[derive(Debug, Clone, Copy)]
pub struct PulldownRenderer {
    options: Options,
}

impl PulldownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}
