//! Wire and domain models shared by the server and the client.

pub mod chat;
pub mod ingest;
pub mod message;
pub mod summary;

pub use chat::{ChatRequest, ChatTurn};
pub use ingest::{IngestRequest, IngestResponse};
pub use message::Message;
pub use summary::{SourceRef, SummariseRequest, SummaryResult};
