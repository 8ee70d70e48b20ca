use thiserror::Error;

// Everything that can go wrong inside one invocation.
// Both kinds surface to the caller as a 500 with the message as `error`.
#[derive(Debug, Error)]
pub enum HandlerError {
    // Inbound body missing, not JSON, or the wrong shape
    #[error("{0}")]
    Validation(String),

    // Generation endpoint unreachable, failing, or returning nothing usable
    #[error("{0}")]
    Upstream(String),
}

impl HandlerError {
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "validation",
            HandlerError::Upstream(_) => "upstream",
        }
    }
}

impl From<reqwest::Error> for HandlerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HandlerError::Upstream(format!("Generation request timed out: {}", e))
        } else {
            HandlerError::Upstream(format!("Request failed: {}", e))
        }
    }
}
