//! High-level species API client
//!
//! Provides the [`SpeciesSource`] seam consumed by the UI and its HTTP
//! implementation, [`RedlistClient`].

use crate::config::{RedlistConfig, normalize_base_url};
use crate::error::RedlistError;
use crate::species::{PageResult, SpeciesQuery};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

/// User agent string for API requests
const USER_AGENT_VALUE: &str = concat!("redlist-explorer/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a species query
///
/// The UI only depends on this trait, so tests can substitute an in-memory
/// source for the HTTP client.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    /// Fetch one page of species for the query
    async fn species(&self, query: &SpeciesQuery) -> Result<PageResult, RedlistError>;
}

/// HTTP client for the species API
#[derive(Debug, Clone)]
pub struct RedlistClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RedlistClient {
    /// Create a client for the given base URL with an optional bearer token
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, RedlistError> {
        let normalized = normalize_base_url(base_url);
        let base_url = Url::parse(&normalized).map_err(|e| {
            RedlistError::ConfigInvalid(format!("Invalid base URL '{}': {}", normalized, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RedlistError::ConfigInvalid(format!(
                "Base URL '{}' cannot carry a path",
                normalized
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RedlistError::ConfigInvalid(format!("Invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        // No client timeout: the fetcher bounds each request itself
        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base_url })
    }

    /// Create a client from a loaded config
    pub fn from_config(config: &RedlistConfig) -> Result<Self, RedlistError> {
        Self::new(&config.base_url, config.token.as_deref())
    }

    /// Get the base URL requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the request URL for a species query
    ///
    /// `{base}/species/{region}?page={page}&category={category}&class_name={class}`
    pub fn species_url(&self, query: &SpeciesQuery) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so the segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("species").push(&query.region);
        }
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("category", &query.category)
            .append_pair("class_name", &query.class_filter);
        url
    }

    /// Fetch one page of species
    pub async fn get_species(&self, query: &SpeciesQuery) -> Result<PageResult, RedlistError> {
        let url = self.species_url(query);
        tracing::debug!("Fetching species from {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RedlistError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_page(&body)
    }
}

#[async_trait]
impl SpeciesSource for RedlistClient {
    async fn species(&self, query: &SpeciesQuery) -> Result<PageResult, RedlistError> {
        self.get_species(query).await
    }
}

/// Decode a species page body and normalize its pagination metadata
pub fn decode_page(body: &str) -> Result<PageResult, RedlistError> {
    let page: PageResult = serde_json::from_str(body)?;
    Ok(page.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(RedlistClient::new("https://api.example.org", None).is_ok());
        assert!(RedlistClient::new("https://api.example.org", Some("token")).is_ok());
    }

    #[test]
    fn test_rejects_bad_token() {
        let err = RedlistClient::new("https://api.example.org", Some("bad\ntoken")).unwrap_err();
        assert!(matches!(err, RedlistError::ConfigInvalid(_)));
    }

    #[test]
    fn test_species_url() {
        let client = RedlistClient::new("https://api.example.org/v1/", None).unwrap();
        let query = SpeciesQuery::new("AF").with_page(2).with_category("EN");
        assert_eq!(
            client.species_url(&query).as_str(),
            "https://api.example.org/v1/species/AF?page=2&category=EN&class_name=all"
        );
    }

    #[test]
    fn test_species_url_without_scheme_or_path() {
        let client = RedlistClient::new("localhost:8000", None).unwrap();
        let query = SpeciesQuery::new("AF");
        assert_eq!(
            client.species_url(&query).as_str(),
            "https://localhost:8000/species/AF?page=0&category=all&class_name=all"
        );
    }

    #[test]
    fn test_species_url_escapes_region() {
        let client = RedlistClient::new("http://localhost", None).unwrap();
        let query = SpeciesQuery::new("north america");
        assert!(
            client
                .species_url(&query)
                .as_str()
                .starts_with("http://localhost/species/north%20america?")
        );
    }

    #[test]
    fn test_decode_page_normalizes() {
        let page = decode_page(r#"{"result": [], "current_page": 0, "max_pages": 0}"#).unwrap();
        assert_eq!(page.max_pages, 1);

        let err = decode_page("<html>").unwrap_err();
        assert!(matches!(err, RedlistError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = RedlistClient::new("http://127.0.0.1:9", None).unwrap();
        let err = client.species(&SpeciesQuery::new("AF")).await.unwrap_err();
        assert!(err.is_fetch_error());
    }
}
