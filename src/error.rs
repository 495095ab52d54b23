//! Request-boundary error type.
//!
//! Expected conditions (missing entry, invalid form, duplicate title, empty
//! or fruitless search) are ordinary pages and never reach this type. What
//! remains is rendered as a generic HTML error page; internal details go to
//! the log only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::repositories::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The entry store failed to read or write.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A random entry was requested but the store holds none.
    #[error("The wiki has no entries")]
    EmptyWiki,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmptyWiki => StatusCode::NOT_FOUND,
        }
    }
}

/// Template for error pages.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub heading: &'static str,
    pub message: &'static str,
    pub offer_create: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let page = match &self {
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Entry store failure");
                ErrorTemplate {
                    heading: "Something went wrong",
                    message: "The wiki could not complete this request. Please try again later.",
                    offer_create: false,
                }
            }
            AppError::EmptyWiki => {
                tracing::info!("Random entry requested from an empty wiki");
                ErrorTemplate {
                    heading: "No entries yet",
                    message: "There are no entries to pick from.",
                    offer_create: true,
                }
            }
        };

        (status, page).into_response()
    }
}
