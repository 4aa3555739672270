//! # archive_core
//!
//! Core domain model and stub generators for Chat Archive.
//!
//! Both the HTTP handlers in `archive_api` and the in-process client stub in
//! `archive_client` build their payloads from [`stub`], so the two variants
//! always agree on shape and content.

pub mod conversation;
pub mod models;
pub mod stub;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Current UTC time as an ISO-8601 string with millisecond precision.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn now_iso_is_utc_millis() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'), "expected Z suffix: {ts}");
        // 2026-01-01T00:00:00.000Z
        assert_eq!(ts.len(), 24, "unexpected shape: {ts}");
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
