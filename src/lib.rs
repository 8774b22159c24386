//! linkcount: a same-host link census
//!
//! This crate crawls a website from a seed URL, follows hyperlinks that stay on
//! the seed's host, and counts how many internal references point at each
//! normalized page URL.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for linkcount operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Errors returned by the page fetcher
///
/// None of these are fatal to a crawl run; a failed fetch only stops the
/// expansion of the page that failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Expected HTML from {url}, got {content_type}")]
    ContentType { url: String, content_type: String },

    #[error("Connection to {url} failed: {source}")]
    Connection { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// Returns true for network-layer failures (as opposed to rejected responses)
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}

/// Result type alias for linkcount operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::{Config, CrawlBudget};
pub use crawler::{run_crawl, Coordinator, CrawlOutcome};
pub use state::{CompletionTracker, PageCounts, PageRegistry};
pub use url::{normalize_url, NormalizedUrl};
