// src/services/chatbot.rs
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::{BridgeError, UpstreamError};
use crate::message::ChatMessage;

pub const EMPTY_MESSAGE_WARNING: &str = "Please enter a message before sending.";

/// A hosted chat-completion endpoint.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Returns the content of the first choice, as the service sent it.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError>;
}

/// One-turn chat: one user message in, one trimmed reply out.
#[derive(Clone)]
pub struct ChatService {
    client: Option<Arc<dyn ChatCompletion>>,
}

impl ChatService {
    pub fn new(client: Option<Arc<dyn ChatCompletion>>) -> Self {
        Self { client }
    }

    pub async fn ask(&self, message: &str) -> Result<String, BridgeError> {
        let client = self
            .client
            .as_ref()
            .ok_or(BridgeError::MissingCredential("OpenAI API key"))?;

        if message.trim().is_empty() {
            return Err(BridgeError::validation(EMPTY_MESSAGE_WARNING));
        }

        let messages = [ChatMessage::user(message)];
        debug!(chars = message.len(), "forwarding message to chat completion");

        match client.complete(&messages).await {
            Ok(reply) => {
                debug!(chars = reply.len(), "received chat completion");
                Ok(reply.trim().to_string())
            }
            Err(e) => {
                error!(error = %e, "chat completion failed");
                Err(e.into())
            }
        }
    }
}
