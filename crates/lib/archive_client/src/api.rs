//! The request surface shared by the HTTP client and the in-process stub.

use std::path::Path;

use archive_core::models::{ChatTurn, IngestResponse, Message, SummaryResult};
use async_trait::async_trait;

use crate::error::Result;

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Declared file name, sent as the multipart `filename`.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Reads `path` into memory, naming the upload after its last component.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }
}

/// What to ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestInput {
    Url(String),
    File(Upload),
}

/// The three archive requests.
#[async_trait]
pub trait ArchiveApi: Send + Sync {
    /// `POST /ingest`.
    async fn ingest(&self, input: IngestInput) -> Result<IngestResponse>;

    /// `POST /summarise`.
    async fn summarise(&self, messages: &[Message]) -> Result<SummaryResult>;

    /// `POST /chat`.
    async fn chat(&self, conversation_id: &str, question: &str) -> Result<ChatTurn>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_from_path_uses_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("export.txt");
        std::fs::write(&path, b"hello").expect("write");

        let upload = Upload::from_path(&path).expect("read upload");
        assert_eq!(upload.name, "export.txt");
        assert_eq!(upload.bytes, b"hello");
    }

    #[test]
    fn upload_from_missing_path_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(Upload::from_path(&dir.path().join("missing.txt")).is_err());
    }
}
