//! Integration tests for `/slides/generate`, `/slides/generate-image` and `/title`.

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{FailingCompletion, SCRIPTED_TITLE, TestState};

#[actix_web::test]
async fn test_generate_slide_returns_normalized_slide() {
    let state = TestState::new().await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/slides/generate")
        .set_json(json!({ "prompt": "Market Size", "topic": "Startups" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let slide: Value = test::read_body_json(resp).await;

    assert_eq!(slide["type"], "text");
    assert_eq!(slide["content"]["title"], "Market Size");
    assert_eq!(slide["content"]["body"], "Talking points for Market Size");
    // Generated slides never keep a model-chosen theme or layout.
    assert_eq!(slide["content"]["theme"], "Default");
    assert_eq!(slide["content"]["layout"], "Centered");
    assert!(!slide["id"].as_str().expect("id").is_empty());
}

#[actix_web::test]
async fn test_generate_slide_requires_prompt_and_topic() {
    let state = TestState::new().await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/slides/generate")
        .set_json(json!({ "prompt": "Only a prompt" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_generate_slide_transport_failure_is_server_error() {
    let state = TestState::with_completion(Arc::new(FailingCompletion)).await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/slides/generate")
        .set_json(json!({ "prompt": "Anything", "topic": "Anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to generate content");
}

#[actix_web::test]
async fn test_generate_image_returns_first_hit() {
    let state = TestState::new().await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/slides/generate-image")
        .set_json(json!({ "prompt": "mountain lake" }))
        .to_request();
    let image: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(image["src"], "https://images.example.com/mountain-lake.jpg");
    assert_eq!(image["alt"], "mountain lake");
    assert_eq!(image["caption"], "mountain lake");
}

#[actix_web::test]
async fn test_generate_image_without_hits_is_not_found() {
    let state = TestState::new().await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/slides/generate-image")
        .set_json(json!({ "prompt": "nothing" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/slides/generate-image")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_title_extracts_dollar_delimited_text() {
    let state = TestState::new().await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/title")
        .set_json(json!({ "description": "quarterly sales figures" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "title": SCRIPTED_TITLE }));
}

#[actix_web::test]
async fn test_title_errors() {
    let state = TestState::with_completion(Arc::new(FailingCompletion)).await;
    let app = test::init_service(state.app()).await;

    let req = test::TestRequest::post()
        .uri("/title")
        .set_json(json!({ "description": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/title")
        .set_json(json!({ "description": "anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
