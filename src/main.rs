use chat_relay::config::Args;
use chat_relay::state::AppState;
use chat_relay::upstream::GenerationClient;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments, resolved once for the life of the process
    let args = Args::parse();

    let generator = GenerationClient::new(args.generation_url.clone(), args.request_timeout())?;
    info!(url = %generator.endpoint(), timeout_secs = args.request_timeout, "forwarding to generation endpoint");
    let app = chat_relay::router(AppState { generator });

    let listener = tokio::net::TcpListener::bind(args.bind_addr()).await?;

    info!(port = args.port, "chat relay listening");

    axum::serve(listener, app).await?;
    Ok(())
}
