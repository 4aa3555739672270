//! Route table.
//!
//! Each entry pairs a path with its method router. Adding an endpoint means
//! adding a row here; [`crate::router`] attaches the 405 fallback to every row.

use axum::routing::{MethodRouter, post};

use crate::AppState;
use crate::handlers::{chat, ingest, summarise};

pub const POST_INGEST: &str = "/ingest";
pub const POST_SUMMARISE: &str = "/summarise";
pub const POST_CHAT: &str = "/chat";

/// All routes served by the API.
pub fn table() -> Vec<(&'static str, MethodRouter<AppState>)> {
    vec![
        (POST_INGEST, post(ingest::ingest_handler)),
        (POST_SUMMARISE, post(summarise::summarise_handler)),
        (POST_CHAT, post(chat::chat_handler)),
    ]
}
