//! Client configuration parsing
//!
//! Parses the YAML config file read by redlist-explorer (`~/.redlist/config`).

use crate::error::RedlistError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedlistConfig {
    /// API base URL (e.g., "https://api.example.org/v1")
    pub base_url: String,
    /// Optional bearer token
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Region shown when none is given on the command line
    #[serde(default)]
    pub default_region: Option<String>,
    /// Override for the built-in class table (order is preserved)
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    /// Override for the built-in category table (order is preserved)
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

/// A class code and its display label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassEntry {
    pub code: String,
    pub label: String,
}

/// A category code with its display label and badge color name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    pub code: String,
    pub label: String,
    /// Color name such as "red" or "green"; unknown names fall back to gray
    #[serde(default)]
    pub color: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl RedlistConfig {
    /// Build a config from just a base URL, using defaults for everything else
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_region: None,
            classes: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Load configuration from the default location (~/.redlist/config)
    pub fn load_default() -> Result<Self, RedlistError> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, RedlistError> {
        if !path.exists() {
            return Err(RedlistError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> Result<Self, RedlistError> {
        let config: RedlistConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config path (~/.redlist/config)
    pub fn default_path() -> Result<PathBuf, RedlistError> {
        let home = dirs_next::home_dir().ok_or(RedlistError::NoHomeDirectory)?;
        Ok(home.join(".redlist").join("config"))
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), RedlistError> {
        if self.base_url.trim().is_empty() {
            return Err(RedlistError::ConfigInvalid("base_url is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(RedlistError::ConfigInvalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if let Some(region) = &self.default_region
            && region.trim().is_empty()
        {
            return Err(RedlistError::ConfigInvalid(
                "default_region is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the base URL with a scheme and without a trailing slash
    pub fn api_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }
}

/// Add `https://` when no scheme is given and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
