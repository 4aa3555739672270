//! Plain-text rendering of session state.

use std::fmt::Write;

use archive_client::{Controls, Speaker, Turn, TurnStatus};
use archive_core::models::{Message, SummaryResult};
use chrono::{DateTime, Local};

/// RFC 3339 timestamps in local time; anything else verbatim.
pub fn local_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

pub fn messages(messages: &[Message]) -> String {
    if messages.is_empty() {
        return "(no messages)\n".to_string();
    }
    let mut out = String::new();
    for msg in messages {
        let _ = writeln!(out, "{} - {}", msg.sender, local_time(&msg.timestamp));
        let _ = writeln!(out, "  {}", msg.content);
    }
    out
}

pub fn summary(result: &SummaryResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  {}", result.summary);
    let _ = writeln!(out, "Sources:");
    for source in &result.sources {
        let _ = writeln!(out, "  {} - {}", source.sender, local_time(&source.timestamp));
        let _ = writeln!(out, "    {}", source.snippet);
    }
    out
}

pub fn turn(turn: &Turn) -> String {
    let prefix = match turn.speaker {
        Speaker::User => "Q",
        Speaker::Assistant => "A",
    };
    let marker = match turn.status {
        TurnStatus::Failed => " (failed, no answer)",
        TurnStatus::Pending => " (waiting)",
        TurnStatus::Delivered => "",
    };
    format!("{prefix}: {}{marker}\n", turn.text)
}

pub fn transcript(turns: &[Turn]) -> String {
    turns.iter().map(turn).collect()
}

/// Command list, noting which ones the session does not allow yet.
pub fn help(controls: Controls) -> String {
    let gate = |enabled: bool, reason: &str| {
        if enabled {
            String::new()
        } else {
            format!("  ({reason})")
        }
    };
    let mut out = String::new();
    let _ = writeln!(out, "Commands:");
    let _ = writeln!(out, "  url <URL>        ingest messages from a URL");
    let _ = writeln!(out, "  file <PATH>      ingest messages from a file");
    let _ = writeln!(
        out,
        "  summarise        summarise the current messages{}",
        gate(controls.summarise, "ingest first")
    );
    let _ = writeln!(out, "  ask <QUESTION>   ask about the conversation");
    let _ = writeln!(
        out,
        "  save messages    write chat-messages.json{}",
        gate(controls.download_messages, "ingest first")
    );
    let _ = writeln!(
        out,
        "  save summary     write chat-summary.json{}",
        gate(controls.download_summary, "summarise first")
    );
    let _ = writeln!(out, "  show             print messages, summary and chat");
    let _ = writeln!(out, "  quit             leave");
    out
}

#[cfg(test)]
mod tests {
    use archive_core::models::SourceRef;

    use super::*;

    #[test]
    fn non_rfc3339_timestamp_is_kept() {
        assert_eq!(local_time("t"), "t");
    }

    #[test]
    fn rfc3339_timestamp_is_reformatted() {
        let shown = local_time("2026-03-01T12:00:00.000Z");
        assert_eq!(shown.len(), "2026-03-01 12:00:00".len());
        assert!(!shown.contains('T'));
    }

    #[test]
    fn renders_messages_with_sender_and_content() {
        let out = messages(&[Message::text(1, "t", "user1", "hello there")]);
        assert_eq!(out, "user1 - t\n  hello there\n");
        assert_eq!(super::messages(&[]), "(no messages)\n");
    }

    #[test]
    fn renders_summary_sources() {
        let out = summary(&SummaryResult {
            summary: "short".into(),
            sources: vec![SourceRef {
                id: 1,
                sender: "a".into(),
                timestamp: "t".into(),
                snippet: "x".into(),
            }],
        });
        assert!(out.starts_with("Summary:\n  short\nSources:\n"));
        assert!(out.contains("  a - t\n    x\n"));
    }

    #[test]
    fn failed_turn_is_marked() {
        let t = Turn {
            speaker: Speaker::User,
            text: "hi?".into(),
            timestamp: "t".into(),
            status: TurnStatus::Failed,
        };
        assert_eq!(turn(&t), "Q: hi? (failed, no answer)\n");
    }

    #[test]
    fn help_marks_disabled_actions() {
        let out = help(Controls::default());
        assert!(out.contains("summarise the current messages  (ingest first)"));

        let out = help(Controls {
            summarise: true,
            download_messages: true,
            download_summary: true,
        });
        assert!(!out.contains("first)"));
    }
}
