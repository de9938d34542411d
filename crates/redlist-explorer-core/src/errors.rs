//! Error formatting utilities
//!
//! The table only ever shows a fixed, non-specific message for a failed
//! fetch. The detailed transport error is formatted separately for the log.

use redlist_rs::RedlistError;
use thiserror::Error;

/// Message shown for any failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching table data";

/// Outcome of a failed species load, as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network, decode, or server failure (not distinguished)
    #[error("{}", FETCH_FAILED_MESSAGE)]
    FetchFailed,
    /// The request did not complete within the configured timeout
    #[error("Request timed out after {secs}s")]
    TimedOut { secs: u64 },
}

impl LoadError {
    /// Collapse a transport error into the opaque fetch failure
    pub fn from_fetch_error(error: &RedlistError) -> Self {
        tracing::warn!("Species fetch failed: {}", format_redlist_error(error));
        LoadError::FetchFailed
    }

    /// User-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Format a RedlistError into a readable log line
///
/// # Examples
///
/// ```
/// use redlist_explorer_core::errors::format_redlist_error;
/// use redlist_rs::RedlistError;
///
/// let error = RedlistError::Status { status: 503, body: String::new() };
/// assert!(format_redlist_error(&error).contains("unavailable"));
/// ```
pub fn format_redlist_error(error: &RedlistError) -> String {
    match error {
        RedlistError::Http(e) => format_transport_error(&e.to_string()),
        RedlistError::Status { status, body } => format_status_error(*status, body),
        RedlistError::Decode(e) => format!("Unexpected response body: {}", e),
        RedlistError::ConfigNotFound(path) => format!("Config not found: {}", path),
        RedlistError::ConfigInvalid(msg) => format!("Invalid config: {}", msg),
        _ => error.to_string(),
    }
}

fn format_transport_error(msg: &str) -> String {
    let lower = msg.to_lowercase();
    if lower.contains("refused") {
        "Connection refused - is the API reachable?".to_string()
    } else if lower.contains("dns") || lower.contains("resolve") {
        "DNS resolution failed - check base_url".to_string()
    } else if lower.contains("certificate") || lower.contains("tls") {
        "TLS error - check the API certificate".to_string()
    } else if lower.contains("reset") {
        "Connection reset by peer".to_string()
    } else {
        format!("Transport error: {}", msg)
    }
}

fn format_status_error(status: u16, body: &str) -> String {
    let reason = match status {
        401 | 403 => "Authentication failed - check token",
        404 => "Region or endpoint not found",
        429 => "Rate limited by the API",
        500..=599 => "Service unavailable or failing",
        _ => "Unexpected status",
    };
    if body.is_empty() {
        format!("{} (HTTP {})", reason, status)
    } else {
        format!("{} (HTTP {}): {}", reason, status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        assert_eq!(LoadError::FetchFailed.message(), FETCH_FAILED_MESSAGE);
        assert_eq!(
            LoadError::TimedOut { secs: 10 }.message(),
            "Request timed out after 10s"
        );
    }

    #[test]
    fn test_every_fetch_error_is_opaque() {
        let status = RedlistError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        let decode = redlist_rs::client::decode_page("<html>").unwrap_err();
        assert_eq!(LoadError::from_fetch_error(&status), LoadError::FetchFailed);
        assert_eq!(LoadError::from_fetch_error(&decode), LoadError::FetchFailed);
    }

    #[test]
    fn test_format_status_error() {
        assert!(format_status_error(401, "").contains("Authentication"));
        assert_eq!(format_status_error(404, ""), "Region or endpoint not found (HTTP 404)");
        assert!(format_status_error(502, "bad gateway").ends_with(": bad gateway"));
    }

    #[test]
    fn test_format_transport_error() {
        assert!(format_transport_error("connection refused").contains("refused"));
        assert!(format_transport_error("dns error").contains("DNS"));
        assert!(format_transport_error("weird").starts_with("Transport error"));
    }
}
