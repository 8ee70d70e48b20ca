pub mod chat;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod prompt;
pub mod state;
pub mod upstream;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::handlers::{chat_handler, health_handler, invoke_handler, metrics_handler, preflight_handler};
use crate::state::AppState;

// Path the platform's runtime emulator posts invocations to
pub const INVOKE_PATH: &str = "/2015-03-31/functions/function/invocations";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(INVOKE_PATH, post(invoke_handler))
        .route("/chat", post(chat_handler).options(preflight_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(Arc::new(state))
}
