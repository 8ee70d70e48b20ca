use axum::{body::Bytes, extract::State};
use std::sync::Arc;

use crate::chat::handle_event;
use crate::envelope::{InboundEvent, OutboundEvent};
use crate::state::AppState;

// Plain HTTP entry: the request body is the event body, no claims attached
pub async fn chat_handler(State(state): State<Arc<AppState>>, raw: Bytes) -> OutboundEvent {
    let event = InboundEvent::from_body(String::from_utf8_lossy(&raw).into_owned());
    handle_event(&state.generator, event).await
}

pub async fn preflight_handler() -> OutboundEvent {
    OutboundEvent::preflight()
}
