use board::{app, init_logging, spawn_initial_tip, AppState, Config};
use clap::Parser;
use llm::GeminiClient;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_level);

    let client = Arc::new(GeminiClient::new(&config.gemini_url, config.api_key.clone()));
    let state = AppState::new(client, &config.model);
    spawn_initial_tip(&state);

    let addr: SocketAddr = config.addr.parse()?;
    info!(model = %config.model, "listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
