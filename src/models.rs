use serde::{Deserialize, Serialize};

// Fixed sampling configuration sent with every generation request
pub const MAX_NEW_TOKENS: u32 = 512;
pub const DO_SAMPLE: bool = true;
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.9;

// Who said it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

// One turn of the conversation, round-tripped to the caller on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// Body the client posts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Option<Vec<ConversationTurn>>,
}

// Generation endpoint request format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequestPayload {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationRequestPayload {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: DO_SAMPLE,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

// Generation endpoint response format
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub generated_text: Option<String>,
}

// What goes back to the client, either the reply or an error message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<ConversationTurn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutgoingResult {
    pub fn success(response: String, conversation_history: Vec<ConversationTurn>) -> Self {
        Self {
            success: true,
            response: Some(response),
            conversation_history: Some(conversation_history),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            response: None,
            conversation_history: None,
            error: Some(error),
        }
    }
}
