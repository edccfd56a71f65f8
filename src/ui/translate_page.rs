// src/ui/translate_page.rs
use std::fmt::Write;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::{BridgeError, UpstreamError};
use crate::services::credentials::GcpCredentialStatus;
use crate::services::languages::{self, AUTO_DETECT, LANGUAGES, SourceLanguage};
use crate::services::translator::{TranslationRequest, TranslationService};
use crate::ui::html::{self, AlertKind, OutputStyle};

pub struct TranslatePageState {
    pub translator: TranslationService,
}

pub type SharedTranslatePage = Arc<TranslatePageState>;

#[derive(Debug, Default, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    /// Shown back to the user for reference only; never sent to Google.
    #[serde(default)]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub code: String,
}

pub fn router() -> Router<SharedTranslatePage> {
    Router::new()
        .route("/", get(show_translator).post(run_translation))
        .route("/api/languages", get(list_languages))
        .layer(TraceLayer::new_for_http())
}

async fn list_languages() -> Json<Vec<LanguageEntry>> {
    Json(
        LANGUAGES
            .iter()
            .map(|(name, code)| LanguageEntry {
                name: name.to_string(),
                code: code.to_string(),
            })
            .collect(),
    )
}

async fn show_translator(State(state): State<SharedTranslatePage>) -> Html<String> {
    let form = TranslateForm::default();
    let outcome = html::output_box(OutputStyle::Placeholder, "Translated text will appear here...");
    Html(render(&state, &form, &outcome))
}

async fn run_translation(
    State(state): State<SharedTranslatePage>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    let outcome = match build_request(&form) {
        Ok(req) => translate_and_render(&state.translator, &req).await,
        Err(msg) => html::alert(AlertKind::Warning, &msg),
    };
    Html(render(&state, &form, &outcome))
}

fn build_request(form: &TranslateForm) -> Result<TranslationRequest, String> {
    let source = if form.source.is_empty() {
        SourceLanguage::Auto
    } else {
        languages::source_from_name(&form.source)
            .ok_or_else(|| format!("Unsupported source language: {}", form.source))?
    };
    let target = if form.target.is_empty() {
        None
    } else {
        let code = languages::target_from_name(&form.target)
            .ok_or_else(|| format!("Unsupported target language: {}", form.target))?;
        Some(code.to_string())
    };
    Ok(TranslationRequest {
        text: form.text.clone(),
        source,
        target,
    })
}

fn describe(code: &str) -> String {
    format!("{} ({code})", languages::name_for(code).unwrap_or(code))
}

async fn translate_and_render(service: &TranslationService, req: &TranslationRequest) -> String {
    let outcome = match service.translate(req).await {
        Ok(o) => o,
        Err(BridgeError::Validation(msg)) => return html::alert(AlertKind::Warning, &msg),
        Err(BridgeError::Upstream(UpstreamError::Credential(msg))) => {
            return html::alert(AlertKind::Error, &msg);
        }
        Err(e) => return html::alert(AlertKind::Error, &format!("Error: {e}")),
    };

    if outcome.short_circuited {
        return html::alert(
            AlertKind::Info,
            "Source and Target languages are the same. No translation needed.",
        ) + &html::output_box(OutputStyle::Plain, &outcome.text);
    }

    let mut out = String::new();
    match (req.source, outcome.source.as_deref()) {
        (SourceLanguage::Auto, Some(code)) => {
            out.push_str(&html::alert(
                AlertKind::Info,
                &format!("Detected source language: {}", describe(code)),
            ));
        }
        (SourceLanguage::Fixed(code), _) => {
            out.push_str(&html::alert(
                AlertKind::Info,
                &format!("Source language: {}", describe(code)),
            ));
        }
        (SourceLanguage::Auto, None) => {}
    }
    out.push_str(&html::alert(AlertKind::Success, "Translation successful!"));
    out.push_str(&html::output_box(OutputStyle::Success, &outcome.text));
    out
}

fn credential_alert(status: &GcpCredentialStatus) -> String {
    let kind = match status {
        GcpCredentialStatus::Ready(_) => AlertKind::Success,
        GcpCredentialStatus::Invalid(_) => AlertKind::Error,
        GcpCredentialStatus::Unknown(_) => AlertKind::Warning,
    };
    html::alert(kind, status.message())
}

fn language_table() -> String {
    let mut rows = String::new();
    for (name, code) in LANGUAGES {
        let _ = write!(rows, "<tr><td>{}</td><td><code>{}</code></td></tr>", html::escape(name), html::escape(code));
    }
    format!(
        "<h3>Language Codes</h3><details><summary>Show common language codes</summary>\
         <table>{rows}</table></details>"
    )
}

/// `outcome` is already-rendered markup for the output column.
fn render(state: &TranslatePageState, form: &TranslateForm, outcome: &str) -> String {
    let source_selected = if form.source.is_empty() { AUTO_DETECT } else { form.source.as_str() };
    let target_selected = if form.target.is_empty() {
        LANGUAGES[0].0
    } else {
        form.target.as_str()
    };

    let body = format!(
        "<form method='post' action='/' class='layout'>\
         <aside>\
           <h3>GCP Configuration</h3>\
           <label for='project_id'>GCP Project ID (Optional, for reference)</label>\
           <input type='text' id='project_id' name='project_id' value=\"{project}\" \
             title='Usually inferred from credentials.'>\
           {status}\
           {table}\
         </aside>\
         <main>\
           <h1>🌍 Language Translator (Google Cloud API)</h1>\
           <p>Translate text using the official Google Cloud Translation API.</p>\
           <div class='columns'>\
             <section>\
               <h2>Input</h2>\
               <label for='text'>Enter text to translate:</label>\
               <textarea id='text' name='text' rows='10'>{text}</textarea>\
               <label for='source'>Source Language:</label>\
               <select id='source' name='source'>{sources}</select>\
             </section>\
             <section>\
               <h2>Translation</h2>\
               <label for='target'>Target Language:</label>\
               <select id='target' name='target'>{targets}</select>\
               <button type='submit' style='width: 100%;'>Translate</button>\
               {outcome}\
             </section>\
           </div>\
         </main>\
         </form>",
        project = html::escape(&form.project_id),
        status = credential_alert(state.translator.credentials()),
        table = language_table(),
        text = html::escape(&form.text),
        sources = html::options(languages::source_options(), source_selected),
        targets = html::options(languages::target_options(), target_selected),
    );

    html::page("GCP Translator", &body)
}
