//! HTML page handlers for the wiki.

mod entry;
mod entry_form;
mod index;
mod random;
mod search;

pub use entry::{edit_handler, entry_handler};
pub use entry_form::{new_entry_handler, submit_entry_handler};
pub use index::index_handler;
pub use random::random_handler;
pub use search::search_handler;

use crate::web::routes::entry_path;

/// A title together with the link to its entry page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLink {
    pub title: String,
    pub href: String,
}

impl EntryLink {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            href: entry_path(&title),
            title,
        }
    }
}
