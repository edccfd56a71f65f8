use std::sync::Arc;

use anyhow::Context;
use bridge_backend::{
    config::Settings,
    logging,
    routes,
    services::{
        chatbot::{ChatCompletion, ChatService},
        openai::OpenAiClient,
    },
    state::AppState,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Arc::new(Settings::from_env("0.0.0.0:8000"));
    logging::init_tracing("bridge_backend=debug,tower_http=debug");

    let client = OpenAiClient::from_settings(&settings);
    match &client {
        Some(_) => info!("OpenAI API key loaded"),
        // Keep serving; /api/chat answers 500 until a key is configured.
        None => error!("OPENAI_API_KEY environment variable not found"),
    }
    let chat = ChatService::new(client.map(|c| Arc::new(c) as Arc<dyn ChatCompletion>));

    let state = Arc::new(AppState::new(chat));
    let app = routes::create_router()
        .with_state(state)
        .layer(routes::cors_layer(&settings));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    info!("🚀 bridge backend running at http://{}", settings.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
