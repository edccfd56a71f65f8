#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use bridge_backend::error::UpstreamError;
use bridge_backend::message::ChatMessage;
use bridge_backend::services::chatbot::ChatCompletion;
use bridge_backend::services::translator::{RawTranslation, Translator};

/// Records every conversation it is sent and answers with a canned reply.
#[derive(Default)]
pub struct FakeChat {
    pub reply: Option<String>,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeChat {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Every call fails with an upstream error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for FakeChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.reply.clone().ok_or(UpstreamError::EmptyResponse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCall {
    pub text: String,
    pub target: String,
    pub source: Option<String>,
}

/// Prefixes text with the target code and reports `detected` under auto-detect.
pub struct FakeTranslator {
    pub detected: Option<String>,
    pub fail: bool,
    pub calls: Mutex<Vec<TranslateCall>>,
}

impl FakeTranslator {
    pub fn detecting(code: &str) -> Arc<Self> {
        Arc::new(Self {
            detected: Some(code.to_string()),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            detected: None,
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<RawTranslation, UpstreamError> {
        self.calls.lock().unwrap().push(TranslateCall {
            text: text.to_string(),
            target: target.to_string(),
            source: source.map(String::from),
        });
        if self.fail {
            return Err(UpstreamError::EmptyResponse);
        }
        Ok(RawTranslation {
            translated_text: format!("[{target}] {text}"),
            detected_source: if source.is_none() { self.detected.clone() } else { None },
        })
    }
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
