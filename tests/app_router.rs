mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use encyclopedia::routes::app_router;
use std::path::Path;

fn app_server() -> TestServer {
    let state = common::create_test_state(common::seeded_repository());
    let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");

    // Path normalization must run before routing, so the normalized service
    // is mounted as the fallback of an otherwise empty router.
    let app = Router::new().fallback_service(app_router(state, &static_dir));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let server = app_server();

    let response = server.get("/random/").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    let location = response.header("location");
    assert!(location.to_str().unwrap().starts_with("/wiki/"));

    let response = server.get("/wiki/Python/").await;
    response.assert_status_ok();
    assert!(response.text().contains("<h1>Python</h1>"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = app_server();
    let expected =
        std::fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("static/styles.css"))
            .unwrap();

    let response = server.get("/static/styles.css").await;

    response.assert_status_ok();
    assert_eq!(response.text(), expected);
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
}

#[tokio::test]
async fn test_health_is_mounted() {
    let server = app_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_static_file_is_not_found() {
    let server = app_server();

    let response = server.get("/static/missing.css").await;

    response.assert_status_not_found();
}
