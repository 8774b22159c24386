use serde::Deserialize;

/// Default timeout for a whole request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default timeout for establishing a connection, in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default number of redirects followed before a fetch is rejected
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Complete configuration for one crawl run
#[derive(Debug, Clone)]
pub struct Config {
    pub budget: CrawlBudget,
    pub http: HttpConfig,
    pub user_agent: UserAgentConfig,
}

impl Config {
    /// Creates a configuration with default HTTP and user agent settings
    pub fn new(budget: CrawlBudget) -> Self {
        Self::from_file(budget, FileConfig::default())
    }

    /// Combines a crawl budget with settings loaded from a config file
    pub fn from_file(budget: CrawlBudget, file: FileConfig) -> Self {
        Self {
            budget,
            http: file.http,
            user_agent: file.user_agent,
        }
    }
}

/// Limits fixed for the lifetime of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlBudget {
    /// Maximum number of crawl tasks fetching or parsing at once
    pub max_concurrency: usize,

    /// Number of registered pages after which new tasks stop at entry
    pub max_pages: usize,
}

impl CrawlBudget {
    pub fn new(max_concurrency: usize, max_pages: usize) -> Self {
        Self {
            max_concurrency,
            max_pages,
        }
    }
}

/// Contents of an optional TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout for a whole request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Timeout for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of redirects to follow
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}
