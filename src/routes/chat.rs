use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state.chat.ask(&payload.message).await?;
    Ok(Json(ChatResponse { reply }))
}

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the bridge backend!" }))
}

pub async fn test_handler() -> Json<Value> {
    Json(json!({ "data": "This is a test DATA successfully fetched from the backend!" }))
}
