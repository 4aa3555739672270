//! Session controller: validates user input, calls the backend, and applies
//! the result to the [`Session`].
//!
//! Every action returns a [`Notice`]. Validation failures never reach the
//! backend, and failed requests leave the session as it was, apart from
//! marking an unanswered question as failed.

use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::api::{ArchiveApi, IngestInput, Upload};
use crate::notice::Notice;
use crate::session::{Session, TurnStatus};

pub struct Controller {
    api: Arc<dyn ArchiveApi>,
}

impl Controller {
    pub fn new(api: Arc<dyn ArchiveApi>) -> Self {
        Self { api }
    }

    /// Ingest from a URL.
    pub async fn ingest_url(&self, session: &mut Session, url: &str) -> Notice {
        let url = url.trim();
        if url.is_empty() {
            return Notice::error("Please enter a URL");
        }

        match self.api.ingest(IngestInput::Url(url.to_string())).await {
            Ok(resp) => {
                session.set_messages(resp.messages);
                Notice::success("Successfully ingested messages from URL")
            }
            Err(e) => {
                warn!("Error ingesting from URL: {e}");
                Notice::error(format!("Error ingesting from URL: {e}"))
            }
        }
    }

    /// Ingest an already-selected file. `None` means nothing was selected.
    pub async fn ingest_upload(&self, session: &mut Session, upload: Option<Upload>) -> Notice {
        let Some(upload) = upload else {
            return Notice::error("Please select a file");
        };

        match self.api.ingest(IngestInput::File(upload)).await {
            Ok(resp) => {
                session.set_messages(resp.messages);
                Notice::success("Successfully ingested messages from file")
            }
            Err(e) => {
                warn!("Error ingesting from file: {e}");
                Notice::error(format!("Error ingesting from file: {e}"))
            }
        }
    }

    /// Reads `path` and ingests it. An empty path counts as no selection.
    pub async fn ingest_file(&self, session: &mut Session, path: &Path) -> Notice {
        if path.as_os_str().is_empty() {
            return self.ingest_upload(session, None).await;
        }
        match Upload::from_path(path) {
            Ok(upload) => self.ingest_upload(session, Some(upload)).await,
            Err(e) => Notice::error(format!("Error ingesting from file: {e}")),
        }
    }

    /// Summarise the current message set.
    pub async fn summarise(&self, session: &mut Session) -> Notice {
        let Some(messages) = session.messages() else {
            return Notice::error("No messages to summarize");
        };

        let result = self.api.summarise(messages).await;
        match result {
            Ok(summary) => {
                session.set_summary(summary);
                Notice::success("Successfully generated summary")
            }
            Err(e) => {
                warn!("Error summarizing messages: {e}");
                Notice::error(format!("Error summarizing messages: {e}"))
            }
        }
    }

    /// Ask a question. The question is appended to the transcript before the
    /// request is sent.
    pub async fn ask(&self, session: &mut Session, question: &str) -> Notice {
        let question = question.trim();
        if question.is_empty() {
            return Notice::error("Please enter a question");
        }

        let index = session.push_question(question);
        let conversation_id = session.conversation_id().as_str().to_owned();
        debug!("asking in conversation {conversation_id}");

        match self.api.chat(&conversation_id, question).await {
            Ok(turn) => {
                session.set_turn_status(index, TurnStatus::Delivered);
                session.push_answer(turn.response, turn.timestamp);
                Notice::success("Question answered")
            }
            Err(e) => {
                warn!("Error asking question: {e}");
                session.set_turn_status(index, TurnStatus::Failed);
                Notice::error(format!("Error asking question: {e}"))
            }
        }
    }
}
