//! Error types for the Red List API client

use thiserror::Error;

/// Errors that can occur while talking to the species API or loading config
#[derive(Debug, Error)]
pub enum RedlistError {
    /// Request could not be sent or the connection failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a valid species page
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Could not determine home directory")]
    NoHomeDirectory,
}

impl RedlistError {
    /// Whether the error came from the fetch path (as opposed to configuration)
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            RedlistError::Http(_) | RedlistError::Status { .. } | RedlistError::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = RedlistError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 502: bad gateway");
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_config_errors_are_not_fetch_errors() {
        assert!(!RedlistError::ConfigNotFound("/x".to_string()).is_fetch_error());
        assert!(!RedlistError::NoHomeDirectory.is_fetch_error());
    }

    #[test]
    fn test_decode_error_conversion() {
        let err: RedlistError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, RedlistError::Decode(_)));
    }
}
