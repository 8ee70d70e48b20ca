use tracing::{debug, error, info};

use crate::envelope::{InboundEvent, OutboundEvent};
use crate::error::HandlerError;
use crate::metrics::{FAILURE_TOTAL, REQUEST_TOTAL};
use crate::models::{ConversationTurn, GenerationRequestPayload, IncomingRequest, OutgoingResult};
use crate::prompt::render_prompt;
use crate::upstream::GenerationClient;

// Top level of one invocation. Never fails: errors become a 500 envelope.
pub async fn handle_event(client: &GenerationClient, event: InboundEvent) -> OutboundEvent {
    REQUEST_TOTAL.inc();

    let result = process_event(client, &event).await;
    if let Err(e) = &result {
        FAILURE_TOTAL.inc();
        error!(kind = e.kind(), error = %e, "invocation failed");
    }

    OutboundEvent::from_result(result)
}

// Parse, prompt, generate, append. All or nothing.
pub async fn process_event(
    client: &GenerationClient,
    event: &InboundEvent,
) -> Result<OutgoingResult, HandlerError> {
    debug!(
        event = %serde_json::to_string(event).unwrap_or_default(),
        "received event"
    );

    if let Some(user) = event.user_identity() {
        info!(user, "authenticated user");
    }

    let request = parse_request(event.body.as_deref())?;
    info!(message = %request.message, "processing message");

    let mut conversation = extend_history(
        request.conversation_history.unwrap_or_default(),
        request.message,
    );

    let payload = GenerationRequestPayload::new(render_prompt(&conversation));
    let generated_text = client.generate(&payload).await?;

    conversation.push(ConversationTurn::assistant(generated_text.clone()));

    Ok(OutgoingResult::success(generated_text, conversation))
}

pub fn parse_request(body: Option<&str>) -> Result<IncomingRequest, HandlerError> {
    let body = body.ok_or_else(|| HandlerError::Validation("Request body is missing".to_string()))?;

    serde_json::from_str(body)
        .map_err(|e| HandlerError::Validation(format!("Invalid request body: {}", e)))
}

// Copy of the history with the new user turn at the end
pub fn extend_history(history: Vec<ConversationTurn>, message: String) -> Vec<ConversationTurn> {
    let mut conversation = history;
    conversation.push(ConversationTurn::user(message));
    conversation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn missing_body_is_validation_error() {
        let err = parse_request(None).unwrap_err();
        assert!(matches!(err, HandlerError::Validation(_)));
    }

    #[test]
    fn non_json_body_is_validation_error() {
        let err = parse_request(Some("not json")).unwrap_err();
        assert!(matches!(err, HandlerError::Validation(_)));
        assert!(err.to_string().starts_with("Invalid request body"));
    }

    #[test]
    fn missing_message_is_validation_error() {
        let err = parse_request(Some(r#"{"conversationHistory":[]}"#)).unwrap_err();
        assert!(matches!(err, HandlerError::Validation(_)));
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn wrong_message_type_is_validation_error() {
        let err = parse_request(Some(r#"{"message":42}"#)).unwrap_err();
        assert!(matches!(err, HandlerError::Validation(_)));
    }

    #[test]
    fn history_gets_user_turn_appended() {
        let history = vec![
            ConversationTurn::user("a"),
            ConversationTurn::assistant("b"),
        ];
        let conversation = extend_history(history.clone(), "c".to_string());

        assert_eq!(conversation.len(), 3);
        assert_eq!(&conversation[..2], &history[..]);
        assert_eq!(conversation[2].role, Role::User);
        assert_eq!(conversation[2].content, "c");
    }
}
