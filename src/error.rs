// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;

/// Anything that went wrong on the far side of a hosted API or external tool.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("API response contained no content")]
    EmptyResponse,

    #[error("{0}")]
    Credential(String),
}

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The user left out or mistyped an input; nothing was sent upstream.
    #[error("{0}")]
    Validation(String),

    #[error("{0} not configured")]
    MissingCredential(&'static str),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl BridgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// HTTP mapping of [`BridgeError`] for the JSON backend.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AppError(#[from] pub BridgeError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BridgeError::Validation(_) => StatusCode::BAD_REQUEST,
            BridgeError::MissingCredential(_) | BridgeError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn detail(&self) -> String {
        match &self.0 {
            BridgeError::Upstream(e) => format!("Error communicating with OpenAI: {e}"),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}
