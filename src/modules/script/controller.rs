use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::modules::script::schema::{
    GettingScriptRequest, ScriptErrorResponse, ScriptResponse, NOT_FOUND_REASONS,
};
use crate::services::acquisition::AcquisitionError;
use crate::AppState;

pub async fn get_script(
    State(state): State<AppState>,
    Json(payload): Json<GettingScriptRequest>,
) -> Result<Json<ScriptResponse>, (StatusCode, Json<ScriptErrorResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ScriptErrorResponse::new(e.to_string(), Vec::new())),
        ));
    }

    info!(
        input_link = %payload.input_link,
        language = %payload.language,
        provider = state.acquisition.provider_name(),
        "fetching transcript"
    );

    match state
        .acquisition
        .fetch(&payload.input_link, &payload.language)
        .await
    {
        Ok(result) => Ok(Json(ScriptResponse {
            status: "success",
            video_url: payload.input_link,
            video_id: result.video_id,
            language: payload.language,
            language_used: result.language_used,
            caption_mode: result.mode,
            transcript: result.text,
        })),
        Err(AcquisitionError::InvalidReference(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ScriptErrorResponse::new(
                "Could not extract video ID from URL",
                vec!["Invalid YouTube URL"],
            )),
        )),
        Err(AcquisitionError::NotFound { .. }) => Err((
            StatusCode::BAD_REQUEST,
            Json(ScriptErrorResponse::new(
                "Failed to get transcript",
                NOT_FOUND_REASONS.to_vec(),
            )),
        )),
    }
}
