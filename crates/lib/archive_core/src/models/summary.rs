//! Summary request/response bodies.

use serde::{Deserialize, Deserializer, Serialize};

use super::Message;

/// JSON body of `POST /summarise`. A missing or `null` `messages` field
/// reads as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummariseRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<Message>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Message>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Message>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Per-message reference listed under a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub id: i64,
    pub sender: String,
    pub timestamp: String,
    pub snippet: String,
}

/// Response body of `POST /summarise`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub sources: Vec<SourceRef>,
}
