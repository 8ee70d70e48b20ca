use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::error::HandlerError;
use crate::metrics::UPSTREAM_LATENCY;
use crate::models::{GenerationRequestPayload, GenerationResponse};

pub const NO_CONTENT: &str = "No response content from the model";

// Client for the remote text generation endpoint
#[derive(Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // POST the payload and pull out the generated text.
    // Blocks this invocation until the endpoint answers or the timeout fires.
    pub async fn generate(&self, payload: &GenerationRequestPayload) -> Result<String, HandlerError> {
        debug!(
            payload = %serde_json::to_string(payload).unwrap_or_default(),
            "calling generation endpoint"
        );

        let start_time = Instant::now();
        let res = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = res.status();
        let raw = res.text().await?;
        UPSTREAM_LATENCY.observe(start_time.elapsed().as_secs_f64());
        info!(%status, elapsed_ms = start_time.elapsed().as_millis() as u64, "generation endpoint responded");

        if !status.is_success() {
            return Err(HandlerError::Upstream(format!(
                "Generation endpoint returned {}",
                status
            )));
        }

        let body: GenerationResponse = serde_json::from_str(&raw)
            .map_err(|e| HandlerError::Upstream(format!("Parse Error: {}", e)))?;

        match body.generated_text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(HandlerError::Upstream(NO_CONTENT.to_string())),
        }
    }
}
