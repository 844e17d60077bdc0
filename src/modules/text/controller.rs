use axum::{extract::State, http::StatusCode, Json};
use tracing::error;
use validator::Validate;

use crate::modules::text::{
    prompts,
    schema::{
        AnswerResponse, ChatRequest, MainPointsRequest, MainPointsResponse, MessageResponse,
        SummarizeRequest, SummaryResponse,
    },
};
use crate::AppState;

type ApiError = (StatusCode, Json<MessageResponse>);

fn bad_request(e: validator::ValidationErrors) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse { message: e.to_string() }),
    )
}

async fn generate(state: &AppState, operation: &str, prompt: String) -> Result<String, ApiError> {
    state.llm.generate(&prompt).await.map_err(|e| {
        error!(operation, error = %e, "text generation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse { message: e.to_string() }),
        )
    })
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    payload.validate().map_err(bad_request)?;

    let summary = generate(&state, "summarize", prompts::summarize(&payload.input_text)).await?;

    Ok(Json(SummaryResponse { summary }))
}

pub async fn extract_main_points(
    State(state): State<AppState>,
    Json(payload): Json<MainPointsRequest>,
) -> Result<Json<MainPointsResponse>, ApiError> {
    payload.validate().map_err(bad_request)?;

    let main_points = generate(
        &state,
        "extract_main_points",
        prompts::main_points(&payload.input_text),
    )
    .await?;

    Ok(Json(MainPointsResponse { main_points }))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    payload.validate().map_err(bad_request)?;

    let answer = generate(
        &state,
        "chat",
        prompts::chat(&payload.input_text, &payload.question),
    )
    .await?;

    Ok(Json(AnswerResponse { answer }))
}
