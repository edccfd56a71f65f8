// src/ui/chat_page.rs
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::BridgeError;
use crate::services::chatbot::ChatService;
use crate::services::credentials::{GOOD_KEY_BANNER, KeyReport, MISSING_KEY_BANNER};
use crate::ui::html::{self, AlertKind};

pub struct ChatPageState {
    pub chat: ChatService,
    /// `None` when no key was found at startup.
    pub key_report: Option<KeyReport>,
    pub model: String,
}

pub type SharedChatPage = Arc<ChatPageState>;

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

pub fn router() -> Router<SharedChatPage> {
    Router::new()
        .route("/", get(show_chat).post(send_chat))
        .layer(TraceLayer::new_for_http())
}

async fn show_chat(State(state): State<SharedChatPage>) -> Html<String> {
    Html(render(&state, "", ""))
}

async fn send_chat(State(state): State<SharedChatPage>, Form(form): Form<ChatForm>) -> Html<String> {
    if state.key_report.is_none() {
        return Html(render(&state, "", ""));
    }

    let outcome = match state.chat.ask(&form.message).await {
        Ok(reply) => format!(
            "<p><strong>Response:</strong></p><div class='reply' style='white-space: pre-wrap;'>{}</div>",
            html::escape(&reply)
        ),
        Err(BridgeError::Validation(msg)) => html::alert(AlertKind::Warning, &msg),
        Err(e) => html::alert(AlertKind::Error, &format!("API Error: {e}")),
    };

    Html(render(&state, &form.message, &outcome))
}

fn banner(report: Option<&KeyReport>) -> String {
    match report {
        None => html::alert(AlertKind::Error, MISSING_KEY_BANNER),
        Some(r) if r.is_clean() => html::alert(AlertKind::Success, GOOD_KEY_BANNER),
        Some(r) => r
            .warnings
            .iter()
            .map(|w| html::alert(AlertKind::Warning, w.message()))
            .collect(),
    }
}

/// `outcome` is already-rendered markup.
fn render(state: &ChatPageState, input: &str, outcome: &str) -> String {
    let mut body = String::from("<main>");
    body.push_str(&banner(state.key_report.as_ref()));

    // Without a key the page stops at the banner.
    if state.key_report.is_some() {
        body.push_str(&format!(
            "<h1>💬 Chat with {model}</h1>\
             <form method='post' action='/'>\
             <label for='message'>Enter your message to GPT:</label>\
             <input type='text' id='message' name='message' value=\"{input}\">\
             <button type='submit'>Send</button>\
             </form>{outcome}",
            model = html::escape(&state.model),
            input = html::escape(input),
        ));
    }
    body.push_str("</main>");

    html::page("Chat", &body)
}
