//! Entry page and edit page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::EntryForm;
use crate::web::routes::edit_path;

/// Template for an entry rendered from Markdown.
#[derive(Template, WebTemplate)]
#[template(path = "entry.html")]
pub struct EntryTemplate {
    pub entry_title: String,
    /// Rendered HTML, inserted unescaped.
    pub content: String,
    pub edit_href: String,
}

/// Template for a title with no entry.
#[derive(Template, WebTemplate)]
#[template(path = "no_entry_here.html")]
pub struct NoEntryTemplate {
    pub entry_title: String,
}

/// Template for the edit page.
///
/// Shares the form markup with the creation page.
#[derive(Template, WebTemplate)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub form: EntryForm,
}

pub(super) fn not_found(title: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        NoEntryTemplate { entry_title: title },
    )
        .into_response()
}

/// Renders an entry.
///
/// # Endpoint
///
/// `GET /wiki/{title}`
///
/// Responds 404 with the "not found" page, carrying the requested title,
/// if no entry has that exact title. Nothing is created.
pub async fn entry_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, AppError> {
    let Some(entry) = state.entry_service.render_entry(&title).await? else {
        return Ok(not_found(title));
    };

    Ok(EntryTemplate {
        edit_href: edit_path(&entry.title),
        entry_title: entry.title,
        content: entry.html,
    }
    .into_response())
}

/// Renders the edit form pre-filled with an entry's current content.
///
/// # Endpoint
///
/// `GET /wiki/{title}/edit`
///
/// The title is read-only and the hidden edit flag is set, so submitting the
/// form overwrites the entry.
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, AppError> {
    let Some(entry) = state.entry_service.get_entry(&title).await? else {
        return Ok(not_found(title));
    };

    Ok(EditTemplate {
        form: EntryForm::prefilled(entry.title, entry.content),
    }
    .into_response())
}
