//! Request handlers.

pub mod chat;
pub mod fallback;
pub mod ingest;
pub mod summarise;
