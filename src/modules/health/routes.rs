use axum::{routing::get, Router};

use crate::modules::health::controller;

/// Stateless, so it merges into either the backend or the gateway router.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(controller::root))
        .route("/health", get(controller::health))
}
