use axum::{routing::post, Router};

use crate::modules::gateway::controller;
use crate::GatewayState;

pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route(
            "/getting_script_from_video",
            post(controller::getting_script_from_video),
        )
        .route("/summarize", post(controller::summarize))
        .route("/extract_main_points", post(controller::extract_main_points))
        .route("/chat", post(controller::chat))
}
