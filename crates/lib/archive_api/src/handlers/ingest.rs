//! Ingestion request handler — stub.
//!
//! Dispatches on content type: JSON `{url}` or a multipart `file` part.
//! Anything else yields an empty message list.

use archive_core::models::{IngestRequest, IngestResponse};
use archive_core::stub;
use axum::Json;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::extract::JsonBody;

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// `POST /ingest` — two stub messages naming the URL or file.
pub async fn ingest_handler(request: Request) -> AppResult<Json<IngestResponse>> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let messages = if content_type.contains("application/json") {
        let JsonBody(body) = JsonBody::<IngestRequest>::from_request(request, &()).await?;
        match body.url() {
            Some(url) => stub::ingest_url(url),
            None => Vec::new(),
        }
    } else if content_type.contains("multipart/form-data") {
        let multipart = Multipart::from_request(request, &()).await?;
        match uploaded_file_name(multipart).await? {
            Some(name) => stub::ingest_file(&name),
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    info!(count = messages.len(), "ingest complete");
    Ok(Json(IngestResponse { messages }))
}

/// Declared file name of the first `file` part, reading the part to the end.
async fn uploaded_file_name(mut multipart: Multipart) -> AppResult<Option<String>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await?;
        debug!(file_name = %name, size = bytes.len(), "received upload");
        return Ok(Some(name));
    }
    Ok(None)
}
