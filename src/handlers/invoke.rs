use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;
use tracing::warn;

use crate::chat::handle_event;
use crate::envelope::{InboundEvent, OutboundEvent};
use crate::error::HandlerError;
use crate::metrics::{FAILURE_TOTAL, REQUEST_TOTAL};
use crate::state::AppState;

// Raw platform-style invocation: event JSON in, envelope JSON out.
// The envelope carries the real status, the HTTP status here is always 200.
pub async fn invoke_handler(
    State(state): State<Arc<AppState>>,
    raw: Bytes,
) -> Json<OutboundEvent> {
    let event = match serde_json::from_slice::<InboundEvent>(&raw) {
        Ok(event) => event,
        Err(e) => {
            REQUEST_TOTAL.inc();
            FAILURE_TOTAL.inc();
            warn!(error = %e, "invocation event is not valid JSON");
            return Json(OutboundEvent::from_result(Err(HandlerError::Validation(
                format!("Invalid event: {}", e),
            ))));
        }
    };

    Json(handle_event(&state.generator, event).await)
}
