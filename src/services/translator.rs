// src/services/translator.rs
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::{BridgeError, UpstreamError};
use crate::services::credentials::GcpCredentialStatus;
use crate::services::languages::{self, SourceLanguage};

pub const EMPTY_TEXT_WARNING: &str = "Please enter some text to translate.";
pub const MISSING_TARGET_WARNING: &str = "Please select a target language.";

/// What the hosted service sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTranslation {
    pub translated_text: String,
    pub detected_source: Option<String>,
}

/// A hosted translation endpoint.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<RawTranslation, UpstreamError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: SourceLanguage,
    /// Catalog code; `None` when the user picked nothing.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub text: String,
    /// Detected code under auto-detect, else the code the user chose.
    pub source: Option<String>,
    /// Source and target were the same; `text` is the input, unchanged.
    pub short_circuited: bool,
}

#[derive(Clone)]
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    credentials: GcpCredentialStatus,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>, credentials: GcpCredentialStatus) -> Self {
        Self {
            translator,
            credentials,
        }
    }

    pub fn credentials(&self) -> &GcpCredentialStatus {
        &self.credentials
    }

    pub async fn translate(&self, req: &TranslationRequest) -> Result<TranslationOutcome, BridgeError> {
        if req.text.is_empty() {
            return Err(BridgeError::validation(EMPTY_TEXT_WARNING));
        }
        let target = match req.target.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => return Err(BridgeError::validation(MISSING_TARGET_WARNING)),
        };
        if !languages::is_supported(target) {
            return Err(BridgeError::validation(format!("Unsupported target language: {target}")));
        }
        let source = req.source.code();
        if let Some(src) = source {
            if !languages::is_supported(src) {
                return Err(BridgeError::validation(format!("Unsupported source language: {src}")));
            }
            if src == target {
                return Ok(TranslationOutcome {
                    text: req.text.clone(),
                    source: Some(src.to_string()),
                    short_circuited: true,
                });
            }
        }

        if self.credentials.blocks_translation() {
            return Err(UpstreamError::Credential(format!(
                "Cannot proceed with translation. {}",
                self.credentials.message()
            ))
            .into());
        }

        debug!(target, ?source, chars = req.text.len(), "requesting translation");
        let raw = self
            .translator
            .translate(&req.text, target, source)
            .await
            .inspect_err(|e| error!(error = %e, "translation failed"))?;

        Ok(TranslationOutcome {
            text: raw.translated_text,
            source: raw.detected_source.or_else(|| source.map(String::from)),
            short_circuited: false,
        })
    }
}
