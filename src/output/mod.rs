//! Output module for crawl reports
//!
//! This module renders the final visit counts of a run as a plain-text report.

mod report;

pub use report::{format_report, print_report, total_links, write_report};
