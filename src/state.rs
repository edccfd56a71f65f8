// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::ChatService;

pub type SharedState = Arc<AppState>;

/// Backend state: built once in `main` from `Settings`, immutable afterwards.
pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self { chat }
    }
}
