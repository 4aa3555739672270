//! Chat message model.

use serde::{Deserialize, Serialize};

/// Message type assumed when an inbound message omits `type`.
pub const DEFAULT_KIND: &str = "text";

/// A single extracted chat message.
///
/// `timestamp` is kept as the string the producer sent. Messages created by
/// the ingest stub carry ISO-8601 UTC timestamps, but callers of
/// `/summarise` may send anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub timestamp: String,
    pub sender: String,
    pub content: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

impl Message {
    /// Builds a `text` message.
    pub fn text(
        id: i64,
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            sender: sender.into(),
            content: content.into(),
            kind: default_kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type() {
        let msg = Message::text(1, "2026-01-01T00:00:00.000Z", "user1", "hi");
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(json["type"], "text");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn missing_type_defaults_to_text() {
        let msg: Message =
            serde_json::from_str(r#"{"id":1,"sender":"a","timestamp":"t","content":"x"}"#)
                .expect("parse");
        assert_eq!(msg.kind, DEFAULT_KIND);
        assert_eq!(msg.timestamp, "t");
    }

    #[test]
    fn missing_content_is_rejected() {
        let err = serde_json::from_str::<Message>(r#"{"id":1,"sender":"a","timestamp":"t"}"#)
            .expect_err("content is required");
        assert!(err.to_string().contains("content"));
    }
}
