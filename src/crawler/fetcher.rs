//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Error classification
//!
//! There is no retry: a failed fetch simply yields no page.

use crate::config::Config;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Source of page HTML for the crawl engine
///
/// Implementations swallow every failure and return `None`; the engine never
/// sees an error from this layer.
pub trait PageFetcher {
    /// Fetches `url` and returns its body as text, or `None` if unavailable
    fn fetch(&self, url: &str) -> impl Future<Output = Option<String>> + Send;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<String>> + Send {
        (**self).fetch(url)
    }
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// A response below 500 was received and its body decoded
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body, decoded lossily
        body: String,
    },

    /// The server answered with a 5xx status
    ServerError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body if the fetch produced one
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(body),
            Self::ServerError { .. } | Self::NetworkError { .. } => None,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Value of the User-Agent header
/// * `timeout` - Total time allowed for one request, body included
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use web_sweep::crawler::build_http_client;
///
/// let client = build_http_client("ExampleBot/1.0", Duration::from_secs(15)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with error classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Status < 500 (4xx included) | Success, body decoded lossily |
/// | Status >= 500 | ServerError |
/// | Connect error, timeout, invalid URL | NetworkError |
/// | Body read failure | NetworkError |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            return FetchResult::NetworkError { error };
        }
    };

    let status_code = response.status().as_u16();
    if status_code >= 500 {
        return FetchResult::ServerError { status_code };
    }

    // `text` decodes with the declared charset and replaces invalid sequences
    match response.text().await {
        Ok(body) => FetchResult::Success { status_code, body },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}

/// Production fetcher backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the crawler configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(
            &config.user_agent.value,
            Duration::from_secs(config.crawler.timeout_secs),
        )?;
        Ok(Self::with_client(client))
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let result = fetch_url(&self.client, url).await;
        match &result {
            FetchResult::Success { status_code, body } => {
                tracing::trace!("Fetched {} (HTTP {}, {} bytes)", url, status_code, body.len());
            }
            FetchResult::ServerError { status_code } => {
                tracing::debug!("Server error for {}: HTTP {}", url, status_code);
            }
            FetchResult::NetworkError { error } => {
                tracing::debug!("Network error for {}: {}", url, error);
            }
        }
        result.into_body()
    }
}
