//! Summarise request handler — stub.

use archive_core::models::{SummariseRequest, SummaryResult};
use archive_core::stub;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;

/// `POST /summarise` — count-based summary plus one source per message.
pub async fn summarise_handler(
    JsonBody(body): JsonBody<SummariseRequest>,
) -> AppResult<Json<SummaryResult>> {
    Ok(Json(stub::summarise(&body.messages)))
}
