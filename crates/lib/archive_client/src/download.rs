//! Download actions: pretty-printed JSON of the current session state.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;

use crate::error::Result;
use crate::notice::Notice;
use crate::session::Session;

pub const MESSAGES_FILE: &str = "chat-messages.json";
pub const SUMMARY_FILE: &str = "chat-summary.json";

/// Writes the current message set to `dir/chat-messages.json`.
pub fn download_messages(session: &Session, dir: &Path) -> Notice {
    let Some(messages) = session.messages() else {
        return Notice::error("No messages to download");
    };
    match write_json(messages, dir, MESSAGES_FILE) {
        Ok(_) => Notice::success("Messages downloaded"),
        Err(e) => {
            warn!("failed to write {MESSAGES_FILE}: {e}");
            Notice::error(format!("Error downloading messages: {e}"))
        }
    }
}

/// Writes the current summary to `dir/chat-summary.json`.
pub fn download_summary(session: &Session, dir: &Path) -> Notice {
    let Some(summary) = session.summary() else {
        return Notice::error("No summary to download");
    };
    match write_json(summary, dir, SUMMARY_FILE) {
        Ok(_) => Notice::success("Summary downloaded"),
        Err(e) => {
            warn!("failed to write {SUMMARY_FILE}: {e}");
            Notice::error(format!("Error downloading summary: {e}"))
        }
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use archive_core::models::{Message, SummaryResult};

    use super::*;
    use crate::controller::Controller;
    use crate::stub::StubApi;

    #[test]
    fn nothing_to_download_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = Session::new();

        assert_eq!(
            download_messages(&session, dir.path()),
            Notice::error("No messages to download")
        );
        assert_eq!(
            download_summary(&session, dir.path()),
            Notice::error("No summary to download")
        );
        assert!(!dir.path().join(MESSAGES_FILE).exists());
        assert!(!dir.path().join(SUMMARY_FILE).exists());
    }

    #[tokio::test]
    async fn downloads_pretty_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let controller = Controller::new(Arc::new(StubApi));
        let mut session = Session::new();
        controller.ingest_url(&mut session, "http://example.com").await;
        controller.summarise(&mut session).await;

        assert_eq!(
            download_messages(&session, dir.path()),
            Notice::success("Messages downloaded")
        );
        assert_eq!(
            download_summary(&session, dir.path()),
            Notice::success("Summary downloaded")
        );

        let raw = fs::read_to_string(dir.path().join(MESSAGES_FILE)).expect("read messages");
        assert!(raw.contains("\n  {"), "expected pretty-printed JSON: {raw}");
        let messages: Vec<Message> = serde_json::from_str(&raw).expect("parse messages");
        assert_eq!(messages.as_slice(), session.messages().expect("messages"));

        let raw = fs::read_to_string(dir.path().join(SUMMARY_FILE)).expect("read summary");
        let summary: SummaryResult = serde_json::from_str(&raw).expect("parse summary");
        assert_eq!(&summary, session.summary().expect("summary"));
    }

    #[test]
    fn unwritable_directory_reports_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        let mut session = Session::new();
        session.set_messages(Vec::new());

        let notice = download_messages(&session, &missing);
        assert!(notice.is_error());
    }
}
