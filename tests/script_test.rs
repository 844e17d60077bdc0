mod common;

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use common::{app_state, FakeLlm, FakeProvider};
use vidscript::modules;
use vidscript::services::transcript::CaptionMode;

fn setup_test_server(provider: Arc<FakeProvider>) -> TestServer {
    let state = app_state(provider, FakeLlm::replying("unused"));

    let app = Router::new()
        .merge(modules::script::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_get_script_preferred_language() {
    let provider = FakeProvider::new(vec![("en", CaptionMode::Manual, "hello from the video")]);
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/getting_script")
        .json(&json!({
            "input_link": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "language": "en"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["video_url"], "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(body["video_id"], "dQw4w9WgXcQ");
    assert_eq!(body["language"], "en");
    assert_eq!(body["language_used"], "en");
    assert_eq!(body["caption_mode"], "manual");
    assert_eq!(body["transcript"], "hello from the video");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_get_script_falls_back_to_generated_captions() {
    let provider = FakeProvider::new(vec![("ar", CaptionMode::Generated, "نص تلقائي")]);
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/getting_script")
        .json(&json!({
            "input_link": "https://youtu.be/dQw4w9WgXcQ?si=share",
            "language": "fr"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["language"], "fr");
    assert_eq!(body["language_used"], "ar");
    assert_eq!(body["caption_mode"], "generated");
    // en manual, ar manual, en generated, ar generated
    assert_eq!(provider.calls(), 4);
}

#[tokio::test]
async fn test_get_script_not_found() {
    let provider = FakeProvider::new(vec![]);
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/getting_script")
        .json(&json!({
            "input_link": "https://youtu.be/dQw4w9WgXcQ",
            "language": "ar"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Failed to get transcript");
    assert_eq!(
        body["possible_reasons"],
        json!(["Video has no captions", "Language not available", "Invalid YouTube URL"])
    );
    assert_eq!(provider.calls(), 4);
}

#[tokio::test]
async fn test_get_script_invalid_reference() {
    let provider = FakeProvider::new(vec![("en", CaptionMode::Manual, "text")]);
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/getting_script")
        .json(&json!({
            "input_link": "https://example.com/watch?list=abc",
            "language": "en"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Could not extract video ID from URL");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_get_script_empty_fields_fail() {
    let provider = FakeProvider::new(vec![("en", CaptionMode::Manual, "text")]);
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/getting_script")
        .json(&json!({
            "input_link": "",
            "language": "en"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_get_script_regional_arabic_code_starts_with_english() {
    let provider = FakeProvider::new(vec![
        ("en", CaptionMode::Manual, "english captions"),
        ("ar", CaptionMode::Manual, "ترجمة"),
    ]);
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/getting_script")
        .json(&json!({
            "input_link": "https://youtu.be/dQw4w9WgXcQ",
            "language": "ar-EG"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["language"], "ar-EG");
    assert_eq!(body["language_used"], "en");
    assert_eq!(body["transcript"], "english captions");
    assert_eq!(provider.calls(), 1);
}
