//! Chat request handler — stub.

use archive_core::models::{ChatRequest, ChatTurn};
use archive_core::stub;
use axum::Json;
use tracing::debug;

use crate::error::AppResult;
use crate::extract::JsonBody;

/// `POST /chat` — fixed answer, echoing the conversation id.
pub async fn chat_handler(JsonBody(body): JsonBody<ChatRequest>) -> AppResult<Json<ChatTurn>> {
    debug!(
        conversation_id = %body.conversation_id,
        question_len = body.question.len(),
        "chat question"
    );
    Ok(Json(stub::answer(&body.conversation_id)))
}
