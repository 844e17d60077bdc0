use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::modules::gateway::{
    forward::{forward_batch, require_fields},
    schema::{BatchResponse, GatewayErrorResponse, Operation},
};
use crate::GatewayState;

pub async fn getting_script_from_video(State(state): State<GatewayState>, body: Bytes) -> Response {
    dispatch(&state, Operation::Script, &body).await
}

pub async fn summarize(State(state): State<GatewayState>, body: Bytes) -> Response {
    dispatch(&state, Operation::Summarize, &body).await
}

pub async fn extract_main_points(State(state): State<GatewayState>, body: Bytes) -> Response {
    dispatch(&state, Operation::ExtractMainPoints, &body).await
}

pub async fn chat(State(state): State<GatewayState>, body: Bytes) -> Response {
    dispatch(&state, Operation::Chat, &body).await
}

/// A body that is not JSON is treated like an empty object, so it falls
/// through to field validation.
async fn dispatch(state: &GatewayState, operation: Operation, body: &[u8]) -> Response {
    let data: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    if let Some(items) = data.get("requests").and_then(Value::as_array) {
        info!(route = operation.route(), items = items.len(), "forwarding batch");
        let results = forward_batch(&state.downstream, operation, items).await;
        return Json(BatchResponse { results }).into_response();
    }

    forward_single(state, operation, &data).await
}

async fn forward_single(state: &GatewayState, operation: Operation, data: &Value) -> Response {
    let payload = match require_fields(data, operation.required_fields()) {
        Ok(payload) => payload,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(GatewayErrorResponse::new(error))).into_response();
        }
    };

    let reply = match state
        .downstream
        .post(operation.backend_path(), &payload)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            warn!(route = operation.route(), error = %e, "backend unreachable");
            return internal_error(e.to_string());
        }
    };

    if !reply.status.is_success() {
        warn!(route = operation.route(), status = %reply.status, "backend rejected request");
        let body = GatewayErrorResponse {
            error: format!("{} API failed", operation.label()),
            details: Some(reply.details()),
        };
        return (reply.status, Json(body)).into_response();
    }

    match reply.json() {
        Ok(value) => Json(value).into_response(),
        Err(e) => internal_error(e.to_string()),
    }
}

fn internal_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GatewayErrorResponse::new(message)),
    )
        .into_response()
}
