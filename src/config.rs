use clap::Parser;
use std::time::Duration;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "chat-relay")]
#[command(about = "Relays chat messages to a text generation endpoint")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // Generation endpoint the prompt is POSTed to
    // Example: "https://generator.internal/generate"
    #[arg(short, long, env = "GENERATION_ENDPOINT_URL")]
    pub generation_url: String,

    // Timeout for one generation call, in seconds
    #[arg(short = 't', long, env = "GENERATION_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout: u64,
}

impl Args {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
