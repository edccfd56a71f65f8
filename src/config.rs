// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translation.googleapis.com";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_GCLOUD_BIN: &str = "gcloud";
pub const DEFAULT_YOLO_BIN: &str = "yolo";

/// Process-wide settings, read once at startup and shared through axum state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Kept verbatim (not trimmed) so the credential check can see stray whitespace.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub google_api_key: Option<String>,
    pub google_application_credentials: Option<PathBuf>,
    pub translate_base_url: String,
    /// Program asked for Application Default Credentials tokens.
    pub gcloud_bin: String,
    /// Ultralytics CLI used by the training launcher.
    pub yolo_bin: String,
    pub cors_origins: Vec<String>,
    pub bind_addr: String,
}

impl Settings {
    /// Load `.env` (if any) and read every setting from the environment.
    pub fn from_env(default_bind: &str) -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(default_bind, |key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. `from_env` is the
    /// production caller; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(default_bind: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cors_origins = non_blank("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Self {
            openai_api_key: lookup("OPENAI_API_KEY").filter(|v| !v.is_empty()),
            openai_base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: non_blank("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            google_api_key: non_blank("GOOGLE_API_KEY"),
            google_application_credentials: non_blank("GOOGLE_APPLICATION_CREDENTIALS")
                .map(PathBuf::from),
            translate_base_url: non_blank("GOOGLE_TRANSLATE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TRANSLATE_BASE_URL.to_string()),
            gcloud_bin: non_blank("GCLOUD_BIN").unwrap_or_else(|| DEFAULT_GCLOUD_BIN.to_string()),
            yolo_bin: non_blank("YOLO_BIN").unwrap_or_else(|| DEFAULT_YOLO_BIN.to_string()),
            cors_origins,
            bind_addr: non_blank("BIND_ADDR").unwrap_or_else(|| default_bind.to_string()),
        }
    }
}
