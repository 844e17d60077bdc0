use axum::{routing::post, Router};

use crate::modules::text::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summarize", post(controller::summarize))
        .route("/extract_main_points", post(controller::extract_main_points))
        .route("/chat", post(controller::chat))
}
