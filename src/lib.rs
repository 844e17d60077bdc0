use axum::{http::StatusCode, response::IntoResponse, response::Response, Json, Router};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use modules::gateway::forward::Downstream;
use services::acquisition::Acquisition;
use services::llm::TextGenerator;

pub mod config;
pub mod modules;
pub mod services;

/// Backend service state: transcript acquisition plus text generation.
#[derive(Clone)]
pub struct AppState {
    pub acquisition: Acquisition,
    pub llm: Arc<dyn TextGenerator>,
}

#[derive(Clone)]
pub struct GatewayState {
    pub downstream: Downstream,
}

pub fn service_router(state: AppState) -> Router {
    Router::new()
        .merge(modules::health::routes::routes::<AppState>())
        .merge(modules::script::routes::routes())
        .merge(modules::text::routes::routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .merge(modules::health::routes::routes::<GatewayState>())
        .merge(modules::gateway::routes::routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    tracing::error!(%message, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

/// Resolves on Ctrl-C so `axum::serve` can drain in-flight requests.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum_test::TestServer;

    async fn explode() -> &'static str {
        panic!("transcript cache poisoned")
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_internal_error() {
        let app = Router::new()
            .route("/explode", get(explode))
            .merge(modules::health::routes::routes::<()>())
            .layer(CatchPanicLayer::custom(handle_panic));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/explode").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body, json!({ "error": "transcript cache poisoned" }));

        // Later requests are unaffected.
        let health = server.get("/health").await;
        health.assert_status(StatusCode::OK);
        assert_eq!(health.json::<serde_json::Value>(), json!({ "status": "ok" }));
    }
}
