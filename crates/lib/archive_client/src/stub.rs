//! In-process backend with the same shapes as the HTTP API.

use archive_core::models::{ChatTurn, IngestResponse, Message, SummaryResult};
use archive_core::stub;
use async_trait::async_trait;
use log::debug;

use crate::api::{ArchiveApi, IngestInput};
use crate::error::Result;

/// Answers every request locally from the core stub generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubApi;

#[async_trait]
impl ArchiveApi for StubApi {
    async fn ingest(&self, input: IngestInput) -> Result<IngestResponse> {
        debug!("StubApi::ingest called with: {input:?}");
        let messages = match input {
            IngestInput::Url(url) if !url.is_empty() => stub::ingest_url(&url),
            IngestInput::File(upload) => stub::ingest_file(&upload.name),
            IngestInput::Url(_) => Vec::new(),
        };
        Ok(IngestResponse { messages })
    }

    async fn summarise(&self, messages: &[Message]) -> Result<SummaryResult> {
        debug!("StubApi::summarise called with {} messages", messages.len());
        Ok(stub::summarise(messages))
    }

    async fn chat(&self, conversation_id: &str, question: &str) -> Result<ChatTurn> {
        debug!("StubApi::chat called for {conversation_id} with question: {question}");
        Ok(stub::answer(conversation_id))
    }
}
