#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use encyclopedia::application::services::EntryService;
use encyclopedia::domain::repositories::EntryRepository;
use encyclopedia::infrastructure::markdown::PulldownRenderer;
use encyclopedia::infrastructure::persistence::InMemoryEntryRepository;
use encyclopedia::state::AppState;
use encyclopedia::web;
use std::sync::Arc;

pub const PYTHON: &str = "# Python\n\nPython is a *programming language*.";
pub const RUBY: &str = "# Ruby\n\nRuby is a dynamic language.";
pub const JAVA: &str = "# Java\n\nJava runs on the JVM.";

/// A store holding the Python, Ruby and Java entries.
pub fn seeded_repository() -> Arc<InMemoryEntryRepository> {
    Arc::new(InMemoryEntryRepository::with_entries([
        ("Python", PYTHON),
        ("Ruby", RUBY),
        ("Java", JAVA),
    ]))
}

pub fn create_test_state(repository: Arc<dyn EntryRepository>) -> AppState {
    let entry_service = Arc::new(EntryService::new(
        repository,
        Arc::new(PulldownRenderer::new()),
    ));
    AppState::new(entry_service)
}

pub fn wiki_router(state: AppState) -> Router {
    web::routes::routes().with_state(state)
}

/// Test server over the wiki routes backed by `repository`.
pub fn test_server(repository: Arc<dyn EntryRepository>) -> TestServer {
    TestServer::new(wiki_router(create_test_state(repository))).unwrap()
}

/// Renders Markdown exactly as the wiki does.
pub fn rendered(markdown: &str) -> String {
    use encyclopedia::infrastructure::markdown::MarkdownRenderer;
    PulldownRenderer::new().render(markdown)
}
