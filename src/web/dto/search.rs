//! Query parameters of the search page.

use serde::Deserialize;

/// `GET /search?q=...`
///
/// A missing `q` is treated the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
