//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with status and content-type filtering
//! - HTML parsing and link extraction
//! - Global concurrency limiting
//! - Recursive crawl tasks and overall crawl coordination

mod coordinator;
mod fetcher;
mod limiter;
mod parser;
mod task;

pub use coordinator::{run_crawl, Coordinator, CrawlOutcome};
pub use fetcher::{build_http_client, HttpFetcher};
pub use limiter::{ConcurrencyLimiter, CrawlPermit};
pub use parser::extract_links;
