// src/services/google_translate.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::debug;

use crate::config::Settings;
use crate::error::UpstreamError;
use crate::services::translator::{RawTranslation, Translator};

/// How requests to the Translation API are authenticated.
#[derive(Debug, Clone)]
pub enum GoogleAuth {
    ApiKey(String),
    /// Ask `gcloud_bin` for an Application Default Credentials token on each
    /// call. Honours `GOOGLE_APPLICATION_CREDENTIALS`.
    ApplicationDefault { gcloud_bin: String },
}

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateEnvelope {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslationItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationItem {
    translated_text: String,
    detected_source_language: Option<String>,
}

/// Cloud Translation API v2 (Basic) over REST.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    auth: GoogleAuth,
}

impl GoogleTranslateClient {
    pub fn new(base_url: impl Into<String>, auth: GoogleAuth) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            auth,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let auth = match &settings.google_api_key {
            Some(key) => GoogleAuth::ApiKey(key.clone()),
            None => GoogleAuth::ApplicationDefault {
                gcloud_bin: settings.gcloud_bin.clone(),
            },
        };
        Self::new(settings.translate_base_url.clone(), auth)
    }
}

async fn application_default_token(gcloud_bin: &str) -> Result<String, UpstreamError> {
    let output = Command::new(gcloud_bin)
        .args(["auth", "application-default", "print-access-token"])
        .output()
        .await
        .map_err(|e| UpstreamError::Credential(format!("could not run {gcloud_bin}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(UpstreamError::Credential(format!(
            "gcloud could not provide an access token: {}",
            stderr.trim()
        )));
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(UpstreamError::Credential("gcloud returned an empty access token".to_string()));
    }
    Ok(token)
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<RawTranslation, UpstreamError> {
        let url = format!("{}/language/translate/v2", self.base_url.trim_end_matches('/'));
        let body = TranslateBody {
            q: text,
            target,
            source,
            format: "text",
        };

        let mut request = self.client.post(&url).json(&body);
        request = match &self.auth {
            GoogleAuth::ApiKey(key) => request.query(&[("key", key)]),
            GoogleAuth::ApplicationDefault { gcloud_bin } => {
                request.bearer_auth(application_default_token(gcloud_bin).await?)
            }
        };

        debug!(target, ?source, "sending translation request");
        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let envelope: TranslateEnvelope = response.json().await?;
        let item = envelope
            .data
            .translations
            .into_iter()
            .next()
            .ok_or(UpstreamError::EmptyResponse)?;

        Ok(RawTranslation {
            translated_text: item.translated_text,
            detected_source: item.detected_source_language,
        })
    }
}
