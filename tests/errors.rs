mod common;

use std::any::Any;

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse, routing::get};
use marquee::error::{AppError, ErrorBody, handle_panic};
use marquee::with_layers;

use common::serve;

async fn body_of(response: axum::response::Response) -> ErrorBody {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse error body")
}

#[tokio::test]
async fn not_found_renders_json_error() {
    let response = AppError::NotFound("Movie not found").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_of(response).await.error, "Movie not found");
}

#[tokio::test]
async fn internal_error_renders_json_error() {
    let response = AppError::Internal("Failed to fetch movies").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_of(response).await.error, "Failed to fetch movies");
}

#[tokio::test]
async fn panics_become_generic_server_errors() {
    let payloads: [Box<dyn Any + Send>; 3] = [
        Box::new("static message"),
        Box::new(String::from("owned message")),
        Box::new(42_u8),
    ];

    for payload in payloads {
        let response = handle_panic(payload);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "Internal server error");
    }
}

async fn explode() -> &'static str {
    panic!("handler blew up")
}

#[tokio::test]
async fn handler_panic_is_answered_with_500_and_server_keeps_serving() {
    let router = axum::Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/explode", get(explode));
    let address = serve(with_layers(router)).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/explode"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorBody = response.json().await.expect("Failed to parse response");
    assert_eq!(body.error, "Internal server error");

    let response = client
        .get(format!("{address}/health"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
