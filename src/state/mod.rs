//! State module for tracking crawl progress
//!
//! This module provides the state shared by every crawl task of one run.
//!
//! # Components
//!
//! - `PageRegistry`: visit counts per normalized URL, with the first-visit gate
//! - `CompletionTracker`: outstanding task count and the end-of-run signal
//! - `RunStats`: counters describing what the tasks did

mod completion;
mod page_registry;
mod run_stats;

// Re-export main types
pub use completion::{CompletionTracker, TaskGuard};
pub use page_registry::{PageCounts, PageRegistry};
pub use run_stats::{RunStats, StatsSnapshot, TaskEvent};
