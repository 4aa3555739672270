//! Client session state.
//!
//! The only mutable state in the system. Controller actions take it by
//! `&mut` and leave it untouched on failure.

use archive_core::conversation::ConversationId;
use archive_core::models::{Message, SummaryResult};

/// Which actions are currently available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub summarise: bool,
    pub download_messages: bool,
    pub download_summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// Delivery state of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// Question sent, no answer yet.
    Pending,
    Delivered,
    /// The request failed; the question stays in the transcript unanswered.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: String,
    pub status: TurnStatus,
}

#[derive(Debug, Clone)]
pub struct Session {
    messages: Option<Vec<Message>>,
    summary: Option<SummaryResult>,
    conversation_id: ConversationId,
    transcript: Vec<Turn>,
    controls: Controls,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session with a newly generated conversation id.
    pub fn new() -> Self {
        Self::with_conversation_id(ConversationId::generate())
    }

    pub fn with_conversation_id(conversation_id: ConversationId) -> Self {
        Self {
            messages: None,
            summary: None,
            conversation_id,
            transcript: Vec::new(),
            controls: Controls::default(),
        }
    }

    pub fn messages(&self) -> Option<&[Message]> {
        self.messages.as_deref()
    }

    pub fn summary(&self) -> Option<&SummaryResult> {
        self.summary.as_ref()
    }

    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub(crate) fn set_messages(&mut self, messages: Vec<Message>) {
        self.messages = Some(messages);
        self.controls.summarise = true;
        self.controls.download_messages = true;
    }

    pub(crate) fn set_summary(&mut self, summary: SummaryResult) {
        self.summary = Some(summary);
        self.controls.download_summary = true;
    }

    /// Appends a pending user turn and returns its index.
    pub(crate) fn push_question(&mut self, text: &str) -> usize {
        self.transcript.push(Turn {
            speaker: Speaker::User,
            text: text.to_string(),
            timestamp: archive_core::now_iso(),
            status: TurnStatus::Pending,
        });
        self.transcript.len() - 1
    }

    pub(crate) fn push_answer(&mut self, text: String, timestamp: String) {
        self.transcript.push(Turn {
            speaker: Speaker::Assistant,
            text,
            timestamp,
            status: TurnStatus::Delivered,
        });
    }

    pub(crate) fn set_turn_status(&mut self, index: usize, status: TurnStatus) {
        if let Some(turn) = self.transcript.get_mut(index) {
            turn.status = status;
        }
    }
}
