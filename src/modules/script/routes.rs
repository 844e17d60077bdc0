use axum::{routing::post, Router};

use crate::modules::script::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/getting_script", post(controller::get_script))
}
