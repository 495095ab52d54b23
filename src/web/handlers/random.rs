//! Random entry handler.

use axum::{extract::State, response::Redirect};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::routes::entry_path;

/// Redirects to an entry chosen uniformly at random.
///
/// # Endpoint
///
/// `GET /random`
///
/// # Errors
///
/// Renders the "no entries" page (404) when the wiki is empty.
pub async fn random_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let title = state.entry_service.random_title().await?;
    Ok(Redirect::to(&entry_path(&title)))
}
