//! Entry index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use super::EntryLink;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page listing every entry.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub entries: Vec<EntryLink>,
}

/// Renders the list of all entries.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = state
        .entry_service
        .list_titles()
        .await?
        .into_iter()
        .map(EntryLink::new)
        .collect();

    Ok(IndexTemplate { entries })
}
