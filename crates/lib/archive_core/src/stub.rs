//! Canned payload generators.
//!
//! Nothing here looks at real content. Ingest embeds the URL or file name,
//! summarise counts messages, and chat always gives the same answer.

use tracing::debug;

use crate::models::{ChatTurn, Message, SourceRef, SummaryResult};
use crate::now_iso;

/// Maximum snippet length in characters, before the ellipsis.
pub const SNIPPET_LEN: usize = 100;

/// Fixed answer returned for every chat question.
pub const CHAT_ANSWER: &str = "This is a stub answer.";

const URL_FOLLOW_UP: &str = "This is a stubbed response message";
const FILE_FOLLOW_UP: &str = "This is a stubbed message extracted from uploaded file";

/// Messages "extracted" from a URL.
pub fn ingest_url(url: &str) -> Vec<Message> {
    debug!(url, "stub ingest from url");
    pair(format!("Stubbed message from URL: {url}"), URL_FOLLOW_UP)
}

/// Messages "extracted" from an uploaded file.
pub fn ingest_file(file_name: &str) -> Vec<Message> {
    debug!(file_name, "stub ingest from file");
    pair(format!("Stubbed message from file: {file_name}"), FILE_FOLLOW_UP)
}

fn pair(first: String, second: &str) -> Vec<Message> {
    let timestamp = now_iso();
    vec![
        Message::text(1, timestamp.clone(), "user1", first),
        Message::text(2, timestamp, "user2", second),
    ]
}

/// Count-based summary with one source per message, in input order.
pub fn summarise(messages: &[Message]) -> SummaryResult {
    debug!(count = messages.len(), "stub summarise");
    let summary = format!(
        "This is a stubbed summary of {} messages. The conversation covered various topics \
         including user interactions and responses. Key themes identified: communication \
         patterns, user engagement, and content exchange.",
        messages.len()
    );
    let sources = messages.iter().map(source_ref).collect();
    SummaryResult { summary, sources }
}

/// Projects a message onto its summary source reference.
pub fn source_ref(message: &Message) -> SourceRef {
    SourceRef {
        id: message.id,
        sender: message.sender.clone(),
        timestamp: message.timestamp.clone(),
        snippet: snippet(&message.content),
    }
}

/// First [`SNIPPET_LEN`] characters of `content`, plus `...` iff truncated.
pub fn snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_LEN) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// The fixed answer, echoing `conversation_id` and stamped with the current time.
pub fn answer(conversation_id: &str) -> ChatTurn {
    ChatTurn {
        response: CHAT_ANSWER.to_string(),
        conversation_id: conversation_id.to_string(),
        timestamp: now_iso(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_url_embeds_url_in_first_message() {
        let messages = ingest_url("http://example.com");
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0].content,
            "Stubbed message from URL: http://example.com"
        );
        assert_eq!(messages[0].id, 1);
        assert_eq!(messages[1].id, 2);
        assert_eq!(messages[0].sender, "user1");
        assert_eq!(messages[1].sender, "user2");
        assert!(messages.iter().all(|m| m.kind == "text"));
    }

    #[test]
    fn ingest_file_embeds_file_name() {
        let messages = ingest_file("export.txt");
        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("export.txt"));
        assert_eq!(messages[1].content, FILE_FOLLOW_UP);
    }

    #[test]
    fn summarise_counts_messages_and_keeps_order() {
        let messages = vec![
            Message::text(7, "t1", "a", "first"),
            Message::text(3, "t2", "b", "second"),
            Message::text(5, "t3", "c", "third"),
        ];
        let result = summarise(&messages);
        assert!(result.summary.contains("3 messages"));
        let ids: Vec<i64> = result.sources.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
        assert_eq!(result.sources[1].sender, "b");
        assert_eq!(result.sources[2].timestamp, "t3");
    }

    #[test]
    fn summarise_empty_input() {
        let result = summarise(&[]);
        assert!(result.summary.contains("0 messages"));
        assert!(result.sources.is_empty());
    }

    #[test]
    fn snippet_keeps_short_content() {
        assert_eq!(snippet("x"), "x");
        assert_eq!(snippet(""), "");
    }

    #[test]
    fn snippet_boundary_at_exactly_one_hundred() {
        let exact = "a".repeat(SNIPPET_LEN);
        assert_eq!(snippet(&exact), exact);

        let over = "a".repeat(SNIPPET_LEN + 1);
        assert_eq!(snippet(&over), format!("{}...", "a".repeat(SNIPPET_LEN)));
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let content = "é".repeat(150);
        let s = snippet(&content);
        assert_eq!(s.chars().count(), SNIPPET_LEN + 3);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn answer_echoes_conversation_id() {
        let turn = answer("conv_123_abc");
        assert_eq!(turn.conversation_id, "conv_123_abc");
        assert_eq!(turn.response, CHAT_ANSWER);
        assert!(!turn.timestamp.is_empty());
    }
}
