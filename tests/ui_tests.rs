mod common;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use bridge_backend::services::chatbot::ChatService;
use bridge_backend::services::credentials::{GcpCredentialStatus, validate_api_key};
use bridge_backend::services::translator::TranslationService;
use bridge_backend::ui::chat_page::{self, ChatPageState};
use bridge_backend::ui::translate_page::{self, LanguageEntry, TranslatePageState};
use common::{FakeChat, FakeTranslator, body_string, form_post, get};
use tower::util::ServiceExt;

fn chat_app(key: Option<&str>, fake: &Arc<FakeChat>) -> Router {
    let key_report = validate_api_key(key).ok();
    let client = key_report
        .as_ref()
        .map(|_| fake.clone() as Arc<dyn bridge_backend::services::chatbot::ChatCompletion>);
    let state = Arc::new(ChatPageState {
        chat: ChatService::new(client),
        key_report,
        model: "gpt-4o-mini".to_string(),
    });
    chat_page::router().with_state(state)
}

fn translate_app(fake: &Arc<FakeTranslator>) -> Router {
    let state = Arc::new(TranslatePageState {
        translator: TranslationService::new(
            fake.clone(),
            GcpCredentialStatus::Ready("GOOGLE_API_KEY environment variable found.".to_string()),
        ),
    });
    translate_page::router().with_state(state)
}

#[tokio::test]
async fn chat_page_without_key_shows_blocking_error() {
    let fake = FakeChat::replying("hi");
    let response = chat_app(None, &fake).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("No API key found. Please check your .env file."));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn chat_page_warns_about_prefix_but_still_works() {
    let fake = FakeChat::replying("Hi!");
    let app = chat_app(Some("sk-legacy-123"), &fake);

    let html = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("does not start with &#x27;sk-proj-&#x27;"));
    assert!(html.contains("<form"));

    let html = body_string(app.oneshot(form_post("/", "message=Hello")).await.unwrap()).await;
    assert!(html.contains("Response:"));
    assert!(html.contains("Hi!"));
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn chat_page_empty_send_warns_without_calling() {
    let fake = FakeChat::replying("unused");
    let response = chat_app(Some("sk-proj-abc"), &fake)
        .oneshot(form_post("/", "message="))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Please enter a message before sending."));
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn chat_page_escapes_reply_and_reports_errors() {
    let fake = FakeChat::replying("<script>alert(1)</script>");
    let html = body_string(
        chat_app(Some("sk-proj-abc"), &fake)
            .oneshot(form_post("/", "message=hi"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));

    let failing = FakeChat::failing();
    let html = body_string(
        chat_app(Some("sk-proj-abc"), &failing)
            .oneshot(form_post("/", "message=hi"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("API Error:"));
}

#[tokio::test]
async fn translator_page_starts_with_placeholder() {
    let fake = FakeTranslator::detecting("en");
    let html = body_string(translate_app(&fake).oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("Translated text will appear here..."));
    assert!(html.contains("<option value=\"Auto Detect\" selected>"));
    assert!(html.contains("GOOGLE_API_KEY environment variable found."));
}

#[tokio::test]
async fn translator_page_auto_detect_to_french() {
    let fake = FakeTranslator::detecting("en");
    let response = translate_app(&fake)
        .oneshot(form_post("/", "text=Hello&source=Auto+Detect&target=French"))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Detected source language: English (en)"));
    assert!(html.contains("Translation successful!"));
    assert!(html.contains("[fr] Hello"));
    assert!(!html.contains("Translated to"));
}

#[tokio::test]
async fn translator_page_same_language_echoes_escaped_text() {
    let fake = FakeTranslator::detecting("en");
    let response = translate_app(&fake)
        .oneshot(form_post(
            "/",
            "text=%3Ci%3ETom+%26+Jerry%3C%2Fi%3E&source=German&target=German",
        ))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("No translation needed."));
    assert!(html.contains("&lt;i&gt;Tom &amp; Jerry&lt;/i&gt;"));
    assert!(!html.contains("<i>Tom"));
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn translator_page_validation_warnings() {
    let fake = FakeTranslator::detecting("en");
    let app = translate_app(&fake);

    let html = body_string(
        app.clone()
            .oneshot(form_post("/", "text=&source=Auto+Detect&target=French"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Please enter some text to translate."));

    let html = body_string(
        app.oneshot(form_post("/", "text=Hello&source=Auto+Detect&target="))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Please select a target language."));
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn translator_page_shows_chosen_source() {
    let fake = FakeTranslator::detecting("en");
    let html = body_string(
        translate_app(&fake)
            .oneshot(form_post("/", "text=Hola&source=Spanish&target=English"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Source language: Spanish (es)"));
    assert!(html.contains("[en] Hola"));
}

#[tokio::test]
async fn translator_page_upstream_error() {
    let fake = FakeTranslator::failing();
    let html = body_string(
        translate_app(&fake)
            .oneshot(form_post("/", "text=Hello&source=Auto+Detect&target=French"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Error:"));
    assert!(!html.contains("Translation successful!"));
}

#[tokio::test]
async fn language_catalog_endpoint() {
    let fake = FakeTranslator::detecting("en");
    let response = translate_app(&fake).oneshot(get("/api/languages")).await.unwrap();
    let entries: Vec<LanguageEntry> = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(entries.len(), 33);
    assert_eq!(
        entries[0],
        LanguageEntry {
            name: "English".to_string(),
            code: "en".to_string()
        }
    );
}
