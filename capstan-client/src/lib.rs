//! Capstan HTTP Client
//!
//! A type-safe HTTP client for a Jenkins-compatible CI server's job API.
//!
//! The crate exposes two things: the [`JobClient`] capability trait consumed
//! by the reconciliation core, and [`JenkinsClient`], the reqwest-backed
//! implementation that authenticates with a username and API token.
//!
//! # Example
//!
//! ```no_run
//! use capstan_client::JenkinsClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = JenkinsClient::new("http://localhost:8080", "admin", "api-token");
//!
//!     let exists = client.job_exists("nightly").await?;
//!     println!("nightly exists: {}", exists);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use api::JobClient;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for a Jenkins-compatible job API
///
/// Every request carries HTTP basic auth (username + API token). The client
/// holds no mutable state and is safe to share behind an `Arc` across
/// concurrently reconciled resources.
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// Account used for authentication
    username: String,
    /// API token paired with the account (never the account password)
    api_token: String,
    /// HTTP client instance
    client: Client,
}

impl JenkinsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server (e.g., "http://localhost:8080")
    /// * `username` - Account name for basic auth
    /// * `api_token` - API token for basic auth
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self::with_client(base_url, username, api_token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use capstan_client::JenkinsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client =
    ///     JenkinsClient::with_client("http://localhost:8080", "admin", "token", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            api_token: api_token.into(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    /// Start an authenticated GET request
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token))
    }

    /// Start an authenticated POST request
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .basic_auth(&self.username, Some(&self.api_token))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is raw text (e.g., config documents)
    pub(crate) async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to read response body: {}", e)))
    }

    /// Handle an API response that returns no useful content (e.g., deletes)
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
