//! Configuration module for linkcount
//!
//! The crawl budget comes from the command line; HTTP client and user agent
//! settings may optionally be loaded from a TOML file.
//!
//! # Example
//!
//! ```no_run
//! use linkcount::config::{load_config, CrawlBudget};
//! use std::path::Path;
//!
//! let budget = CrawlBudget::new(4, 100);
//! let config = load_config(budget, Some(Path::new("linkcount.toml"))).unwrap();
//! println!("Request timeout: {}s", config.http.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlBudget, FileConfig, HttpConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_file_config};
pub use validation::validate;
