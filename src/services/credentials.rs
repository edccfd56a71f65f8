// src/services/credentials.rs
use std::path::Path;

use tracing::warn;

use crate::config::Settings;
use crate::error::BridgeError;

pub const OPENAI_KEY_PREFIX: &str = "sk-proj-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWarning {
    MissingPrefix,
    SurroundingWhitespace,
}

impl KeyWarning {
    pub fn message(self) -> &'static str {
        match self {
            KeyWarning::MissingPrefix => {
                "⚠️ API key does not start with 'sk-proj-'. Please double-check."
            }
            KeyWarning::SurroundingWhitespace => "⚠️ API key has extra spaces. Please remove them.",
        }
    }
}

/// Outcome of the advisory key check. The key is always handed back for use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub key: String,
    pub warnings: Vec<KeyWarning>,
}

impl KeyReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub const MISSING_KEY_BANNER: &str = "❌ No API key found. Please check your .env file.";
pub const GOOD_KEY_BANNER: &str = "✅ API key looks good!";

/// Presence is the only hard requirement; prefix and whitespace only warn.
pub fn validate_api_key(key: Option<&str>) -> Result<KeyReport, BridgeError> {
    let key = match key {
        Some(k) if !k.is_empty() => k,
        _ => return Err(BridgeError::MissingCredential("OpenAI API key")),
    };

    let mut warnings = Vec::new();
    if !key.starts_with(OPENAI_KEY_PREFIX) {
        warnings.push(KeyWarning::MissingPrefix);
    }
    if key.trim() != key {
        warnings.push(KeyWarning::SurroundingWhitespace);
    }
    for w in &warnings {
        warn!(?w, "OpenAI API key looks unusual");
    }

    Ok(KeyReport {
        key: key.to_string(),
        warnings,
    })
}

/// What we could find out about Google Cloud credentials without calling Google.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GcpCredentialStatus {
    Ready(String),
    /// Configured but unusable; translation must not proceed.
    Invalid(String),
    /// Nothing explicit; Application Default Credentials may still work.
    Unknown(String),
}

impl GcpCredentialStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Ready(m) | Self::Invalid(m) | Self::Unknown(m) => m,
        }
    }

    pub fn blocks_translation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

pub fn check_gcp_credentials(settings: &Settings) -> GcpCredentialStatus {
    check_gcp_paths(
        settings.google_application_credentials.as_deref(),
        settings.google_api_key.is_some(),
    )
}

fn check_gcp_paths(service_account: Option<&Path>, has_api_key: bool) -> GcpCredentialStatus {
    match service_account {
        Some(path) if path.exists() => {
            GcpCredentialStatus::Ready("Service account credentials found.".to_string())
        }
        Some(_) => {
            GcpCredentialStatus::Invalid("GOOGLE_APPLICATION_CREDENTIALS path is invalid.".to_string())
        }
        None if has_api_key => {
            GcpCredentialStatus::Ready("GOOGLE_API_KEY environment variable found.".to_string())
        }
        None => GcpCredentialStatus::Unknown(
            "No explicit GOOGLE_APPLICATION_CREDENTIALS or GOOGLE_API_KEY found. Ensure \
             Application Default Credentials (ADC) are configured (e.g., via `gcloud auth \
             application-default login`)."
                .to_string(),
        ),
    }
}
