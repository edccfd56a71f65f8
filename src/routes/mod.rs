// src/routes/mod.rs
pub mod chat;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use chat::{chat_handler, root_handler, test_handler};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/test", get(test_handler))
        .route("/api/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}

/// Credentialed CORS for the configured front-end origins.
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Wildcards are not allowed alongside credentials, so mirror the request.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
