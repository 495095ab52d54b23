//! Create-or-edit form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::SubmitOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::{EntryForm, FieldError};
use crate::web::routes::entry_path;

/// Template for the creation page.
///
/// `exists` is set when a non-edit submission named an existing entry;
/// `entry_title` and `entry_href` then name that entry.
#[derive(Template, WebTemplate)]
#[template(path = "new_entry.html")]
pub struct NewEntryTemplate {
    pub form: EntryForm,
    pub errors: Vec<FieldError>,
    pub exists: bool,
    pub entry_title: String,
    pub entry_href: String,
}

/// Renders a blank creation form.
///
/// # Endpoint
///
/// `GET /entry_handler`
pub async fn new_entry_handler() -> impl IntoResponse {
    NewEntryTemplate {
        form: EntryForm::default(),
        errors: Vec::new(),
        exists: false,
        entry_title: String::new(),
        entry_href: String::new(),
    }
}

/// Creates a new entry or saves an edit.
///
/// # Endpoint
///
/// `POST /entry_handler`
///
/// # Flow
///
/// 1. Invalid form: redisplay the creation page with field errors
/// 2. Title is new, or the edit flag is set: save and redirect to the entry (303)
/// 3. Title exists and the edit flag is not set: redisplay with "already exists"
pub async fn submit_entry_handler(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AppError> {
    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err((form, errors)) => {
            return Ok(NewEntryTemplate {
                form,
                errors,
                exists: false,
                entry_title: String::new(),
                entry_href: String::new(),
            }
            .into_response());
        }
    };

    match state.entry_service.submit(submission).await? {
        SubmitOutcome::Saved { title } => Ok(Redirect::to(&entry_path(&title)).into_response()),
        SubmitOutcome::AlreadyExists { submission } => Ok(NewEntryTemplate {
            entry_href: entry_path(&submission.title),
            entry_title: submission.title.clone(),
            form: EntryForm::from(submission),
            errors: Vec::new(),
            exists: true,
        }
        .into_response()),
    }
}
