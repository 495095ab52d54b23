//! Request data submitted by the browser.
//!
//! - [`entry_form`] - The create/edit form and its validation
//! - [`search`] - Search query parameters

pub mod entry_form;
pub mod search;

pub use entry_form::{EntryForm, FieldError};
pub use search::SearchParams;
