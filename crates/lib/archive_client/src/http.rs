//! HTTP backend talking to `archive_server` (or any server with the same routes).

use archive_core::models::{
    ChatRequest, ChatTurn, IngestRequest, IngestResponse, Message, SummaryResult,
};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{ArchiveApi, IngestInput};
use crate::error::{ClientError, Result};

/// Default server address, matching `archive_server`'s default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8787";

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

#[derive(Serialize)]
struct SummariseBody<'a> {
    messages: &'a [Message],
}

impl HttpApi {
    /// Creates a client rooted at `base_url`. Endpoint paths are resolved
    /// relative to it, so `http://host/api` serves `http://host/api/chat`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        Ok(self.base.join(name)?)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ArchiveApi for HttpApi {
    async fn ingest(&self, input: IngestInput) -> Result<IngestResponse> {
        let url = self.endpoint("ingest")?;
        let request = match input {
            IngestInput::Url(target) => {
                debug!("POST {url} (url: {target})");
                self.client.post(url).json(&IngestRequest { url: Some(target) })
            }
            IngestInput::File(upload) => {
                debug!("POST {url} (file: {}, {} bytes)", upload.name, upload.bytes.len());
                let part = Part::bytes(upload.bytes).file_name(upload.name);
                self.client.post(url).multipart(Form::new().part("file", part))
            }
        };
        self.send(request).await
    }

    async fn summarise(&self, messages: &[Message]) -> Result<SummaryResult> {
        let url = self.endpoint("summarise")?;
        debug!("POST {url} ({} messages)", messages.len());
        self.send(self.client.post(url).json(&SummariseBody { messages }))
            .await
    }

    async fn chat(&self, conversation_id: &str, question: &str) -> Result<ChatTurn> {
        let url = self.endpoint("chat")?;
        debug!("POST {url} (conversation {conversation_id})");
        let body = ChatRequest {
            conversation_id: conversation_id.to_string(),
            question: question.to_string(),
        };
        self.send(self.client.post(url).json(&body)).await
    }
}
