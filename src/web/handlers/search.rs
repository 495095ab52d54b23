//! Search handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};

use super::EntryLink;
use crate::application::services::SearchOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::SearchParams;
use crate::web::routes::entry_path;

/// Template for a search submitted without a query.
#[derive(Template, WebTemplate)]
#[template(path = "empty_search.html")]
pub struct EmptySearchTemplate {}

/// Template for a search that matched nothing.
#[derive(Template, WebTemplate)]
#[template(path = "no_search_results.html")]
pub struct NoSearchResultsTemplate {
    pub query: String,
}

/// Template listing titles that contain the query.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchResultsTemplate {
    pub query: String,
    pub results: Vec<EntryLink>,
}

/// Searches entry titles.
///
/// # Endpoint
///
/// `GET /search?q={text}`
///
/// # Outcomes
///
/// - Empty query: "empty query" page
/// - Query is exactly a title: redirect to that entry (303)
/// - Titles contain the query, ignoring case: results page
/// - Otherwise: "no results" page
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let response = match state.entry_service.search(&params.q).await? {
        SearchOutcome::EmptyQuery => EmptySearchTemplate {}.into_response(),
        SearchOutcome::ExactMatch { title } => Redirect::to(&entry_path(&title)).into_response(),
        SearchOutcome::NoResults { query } => NoSearchResultsTemplate { query }.into_response(),
        SearchOutcome::Matches { query, titles } => SearchResultsTemplate {
            query,
            results: titles.into_iter().map(EntryLink::new).collect(),
        }
        .into_response(),
    };

    Ok(response)
}
