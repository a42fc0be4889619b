//! Maven Central registry client
//!
//! Fetches the latest published version of the `org.allaymc.allay:api`
//! artifact from the Maven Central search endpoint. The client is
//! explicitly constructed and passed around by the caller; there is no
//! process-wide singleton.
//!
//! The fetch is a single blocking GET with a fixed timeout. No retry, no
//! backoff: on any transport, status or decode failure the lenient
//! [`RegistryClient::latest_version`] wrapper logs a warning and yields
//! `None`, which callers consume as "skip the check silently".

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

/// Default Maven Central search query for the allay API artifact
pub const DEFAULT_SEARCH_URL: &str =
    "https://search.maven.org/solrsearch/select?q=g:org.allaymc.allay+AND+a:api&rows=1&wt=json";

/// Default connect and overall timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from a registry fetch
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Transport-level failure (connect, timeout, TLS, ...)
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-200 status
    #[error("registry answered with HTTP {status}")]
    Status { status: u16 },

    /// The response decoded but contained no documents
    #[error("registry returned no documents")]
    EmptyResult,
}

/// Client for querying the latest published allay API version
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Search endpoint URL
    url: String,
    /// HTTP client
    client: Client,
    /// Request timeout
    timeout: Duration,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient {
    /// Create a client for the default Maven Central search endpoint
    pub fn new() -> Self {
        Self::with_url(DEFAULT_SEARCH_URL)
    }

    /// Create a client with a custom search endpoint URL
    pub fn with_url(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(DEFAULT_TIMEOUT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: url.into(),
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the connect/overall timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        self
    }

    /// Get the search endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the latest published version string
    ///
    /// Requires HTTP 200 and at least one document in the response.
    pub fn fetch_latest(&self) -> Result<String, RegistryError> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
            });
        }

        let search: SearchResponse = response.json()?;
        search
            .response
            .docs
            .into_iter()
            .next()
            .map(|doc| doc.latest_version)
            .ok_or(RegistryError::EmptyResult)
    }

    /// The lenient wrapper: any failure is logged and collapses to `None`
    ///
    /// Callers treat `None` as "no latest version available" and skip the
    /// whole downstream check without surfacing an error.
    pub fn latest_version(&self) -> Option<String> {
        match self.fetch_latest() {
            Ok(version) => Some(version),
            Err(e) => {
                log::warn!("Failed to fetch latest allay version: {e}");
                None
            }
        }
    }
}

/// Wire schema of the search endpoint; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    docs: Vec<ArtifactDoc>,
}

#[derive(Debug, Deserialize)]
struct ArtifactDoc {
    #[serde(rename = "latestVersion")]
    latest_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_default_url() {
        let client = RegistryClient::new();
        assert_eq!(client.url(), DEFAULT_SEARCH_URL);
        assert!(client.url().contains("org.allaymc.allay"));
    }

    #[test]
    fn test_client_custom_url() {
        let client = RegistryClient::with_url("http://localhost:8000/search");
        assert_eq!(client.url(), "http://localhost:8000/search");
    }

    #[test]
    fn test_response_decoding() {
        let body = r#"{
            "responseHeader": { "status": 0, "QTime": 3 },
            "response": {
                "numFound": 1,
                "start": 0,
                "docs": [
                    {
                        "id": "org.allaymc.allay:api",
                        "g": "org.allaymc.allay",
                        "a": "api",
                        "latestVersion": "0.15.0",
                        "versionCount": 12
                    }
                ]
            }
        }"#;

        let decoded: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.response.docs[0].latest_version, "0.15.0");
    }

    #[test]
    fn test_response_decoding_empty_docs() {
        let body = r#"{ "response": { "docs": [] } }"#;
        let decoded: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(decoded.response.docs.is_empty());
    }

    #[test]
    fn test_response_decoding_missing_docs_field() {
        let body = r#"{ "response": {} }"#;
        let decoded: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(decoded.response.docs.is_empty());
    }

    // Integration test - requires network access to search.maven.org

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_latest_from_maven_central() {
        let client = RegistryClient::new();
        match client.fetch_latest() {
            Ok(version) => {
                assert!(!version.is_empty());
            }
            Err(e) => {
                // Allow network failures in CI
                eprintln!("registry test skipped (network error): {e}");
            }
        }
    }
}
