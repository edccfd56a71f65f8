use std::sync::Arc;

use anyhow::Context;
use bridge_backend::{
    config::Settings,
    logging,
    services::{
        chatbot::{ChatCompletion, ChatService},
        credentials::validate_api_key,
        openai::OpenAiClient,
    },
    ui::chat_page::{self, ChatPageState},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env("0.0.0.0:8501");
    logging::init_tracing("bridge_backend=debug,chat_ui=debug,tower_http=info");

    let key_report = match validate_api_key(settings.openai_api_key.as_deref()) {
        Ok(report) => Some(report),
        Err(e) => {
            warn!("{e}; the chat page will only show the error");
            None
        }
    };
    let client = OpenAiClient::from_settings(&settings).map(|c| Arc::new(c) as Arc<dyn ChatCompletion>);

    let state = Arc::new(ChatPageState {
        chat: ChatService::new(client),
        key_report,
        model: settings.openai_model.clone(),
    });
    let app = chat_page::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!("💬 chat page at http://{}", settings.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
