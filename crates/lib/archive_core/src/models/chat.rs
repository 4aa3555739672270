//! Chat request/response bodies.

use serde::{Deserialize, Serialize};

/// JSON body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub conversation_id: String,
    pub question: String,
}

/// Response body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub response: String,
    pub conversation_id: String,
    pub timestamp: String,
}
