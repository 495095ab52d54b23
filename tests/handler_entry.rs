mod common;

use axum::http::StatusCode;
use encyclopedia::domain::repositories::EntryRepository;
use encyclopedia::infrastructure::persistence::InMemoryEntryRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_view_renders_markdown() {
    let server = common::test_server(common::seeded_repository());

    let response = server.get("/wiki/Python").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(&common::rendered(common::PYTHON)));
    assert!(body.contains("<title>Python</title>"));
    assert!(body.contains(r#"href="/wiki/Python/edit""#));
}

#[tokio::test]
async fn test_view_is_case_sensitive() {
    let server = common::test_server(common::seeded_repository());

    let response = server.get("/wiki/python").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_view_not_found_carries_title_and_creates_nothing() {
    let repo = common::seeded_repository();
    let server = common::test_server(repo.clone());

    let response = server.get("/wiki/Haskell").await;

    response.assert_status_not_found();
    assert!(response.text().contains("<strong>Haskell</strong>"));
    assert!(repo.get_entry("Haskell").await.unwrap().is_none());
    assert_eq!(repo.list_entries().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_view_percent_encoded_title() {
    let repo = Arc::new(InMemoryEntryRepository::with_entries([(
        "Hello World",
        "greetings",
    )]));
    let server = common::test_server(repo);

    let response = server.get("/wiki/Hello%20World").await;

    response.assert_status_ok();
    assert!(response.text().contains("<p>greetings</p>"));
}

#[tokio::test]
async fn test_view_escapes_missing_title() {
    let server = common::test_server(common::seeded_repository());

    let response = server.get("/wiki/%3Cscript%3E").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(!body.contains("<script>"));
    assert!(body.contains("&#60;script&#62;") || body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_edit_prefills_form() {
    let server = common::test_server(common::seeded_repository());

    let response = server.get("/wiki/Ruby/edit").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(r#"name="title" value="Ruby" readonly"#));
    assert!(body.contains("Ruby is a dynamic language."));
    assert!(body.contains(r#"name="edit" value="true""#));
    assert!(body.contains(r#"action="/entry_handler""#));
    assert!(!body.contains(r#"class="error""#));
}

#[tokio::test]
async fn test_edit_not_found() {
    let server = common::test_server(common::seeded_repository());

    let response = server.get("/wiki/Haskell/edit").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("<strong>Haskell</strong>"));
}
