use std::sync::Arc;

use anyhow::Context;
use bridge_backend::{
    config::Settings,
    logging,
    services::{
        credentials::{GcpCredentialStatus, check_gcp_credentials},
        google_translate::GoogleTranslateClient,
        translator::TranslationService,
    },
    ui::translate_page::{self, TranslatePageState},
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env("0.0.0.0:8502");
    logging::init_tracing("bridge_backend=debug,translator_ui=debug,tower_http=info");

    let credentials = check_gcp_credentials(&settings);
    match &credentials {
        GcpCredentialStatus::Ready(msg) => info!("{msg}"),
        GcpCredentialStatus::Invalid(msg) => error!("{msg}"),
        GcpCredentialStatus::Unknown(msg) => warn!("{msg}"),
    }

    let client = Arc::new(GoogleTranslateClient::from_settings(&settings));
    let state = Arc::new(TranslatePageState {
        translator: TranslationService::new(client, credentials),
    });
    let app = translate_page::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!("🌍 translator page at http://{}", settings.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
