mod common;

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use common::{app_state, FakeLlm, FakeProvider};
use vidscript::modules;

fn setup_test_server(llm: Arc<FakeLlm>) -> TestServer {
    let state = app_state(FakeProvider::new(vec![]), llm);

    let app = Router::new()
        .merge(modules::text::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_summarize() {
    let llm = FakeLlm::replying("A short summary.");
    let server = setup_test_server(llm.clone());

    let response = server
        .post("/summarize")
        .json(&json!({ "input_text": "A long text about solar panels." }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "summary": "A short summary." }));

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("A long text about solar panels."));
    assert!(prompts[0].trim_end().ends_with("Summary:"));
}

#[tokio::test]
async fn test_extract_main_points() {
    let llm = FakeLlm::replying("1. First\n2. Second");
    let server = setup_test_server(llm.clone());

    let response = server
        .post("/extract_main_points")
        .json(&json!({ "input_text": "Some article." }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["main_points"], "1. First\n2. Second");
    assert!(llm.prompts()[0].contains("Main Points:"));
}

#[tokio::test]
async fn test_chat() {
    let llm = FakeLlm::replying("Panels absorb sunlight.");
    let server = setup_test_server(llm.clone());

    let response = server
        .post("/chat")
        .json(&json!({
            "input_text": "Solar panels absorb sunlight.",
            "question": "How do panels work?"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["answer"], "Panels absorb sunlight.");

    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("Solar panels absorb sunlight."));
    assert!(prompt.contains("How do panels work?"));
}

#[tokio::test]
async fn test_summarize_empty_text_fails() {
    let llm = FakeLlm::replying("unused");
    let server = setup_test_server(llm.clone());

    let response = server
        .post("/summarize")
        .json(&json!({ "input_text": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn test_chat_empty_question_fails() {
    let llm = FakeLlm::replying("unused");
    let server = setup_test_server(llm.clone());

    let response = server
        .post("/chat")
        .json(&json!({ "input_text": "text", "question": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn test_provider_failure_is_internal_error() {
    let server = setup_test_server(FakeLlm::failing("rate limited"));

    let response = server
        .post("/summarize")
        .json(&json!({ "input_text": "text" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "API error: rate limited");
}
