//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests that follow redirects
//! - Rejecting error statuses and non-HTML content
//! - Classifying network failures so one bad request never ends the run

use crate::config::{HttpConfig, UserAgentConfig};
use crate::{FetchError, FetchResult};
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `http` - Timeouts and redirect limit
/// * `user_agent` - The user agent identification
///
/// # Example
///
/// ```no_run
/// use linkcount::config::{HttpConfig, UserAgentConfig};
/// use linkcount::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    http: &HttpConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.request_timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .redirect(Policy::limited(http.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches HTML pages over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from HTTP and user agent settings
    pub fn from_config(
        http: &HttpConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(http, user_agent)?))
    }

    /// Fetches a page and returns its body
    ///
    /// # Request Flow
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 3xx | Followed by the client, up to the redirect limit |
    /// | 4xx / 5xx | `FetchError::Status` |
    /// | `Content-Type` present and not `text/html` | `FetchError::ContentType` |
    /// | No `Content-Type` | Body accepted |
    /// | Timeout | `FetchError::Timeout` |
    /// | Connection refused, DNS, TLS, redirect limit | `FetchError::Connection` |
    pub async fn fetch(&self, url: &Url) -> FetchResult<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_send_error(url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_html(content_type) {
                return Err(FetchError::ContentType {
                    url: url.to_string(),
                    content_type: content_type.to_string(),
                });
            }
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Returns true if a `Content-Type` value denotes an HTML document
fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

fn classify_send_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Connection {
            url: url.to_string(),
            source: error,
        }
    }
}
