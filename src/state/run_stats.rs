//! Counters describing what the crawl tasks of one run did

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A task outcome worth counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    /// A crawl task was spawned (including the seed)
    Spawned,
    /// The page cap was already reached when the task started
    Capped,
    /// The task's URL could not be parsed or normalized
    InvalidUrl,
    /// The URL pointed at another host
    External,
    /// The page had already been recorded; only its count was bumped
    RepeatVisit,
    /// The page body was fetched and its links extracted
    Fetched,
    /// The server answered with an error status or non-HTML content
    FetchRejected,
    /// The request failed at the network layer
    ConnectionFailure,
}

/// Thread-safe counters shared by all crawl tasks
#[derive(Debug, Default)]
pub struct RunStats {
    spawned: AtomicUsize,
    capped: AtomicUsize,
    invalid_urls: AtomicUsize,
    external: AtomicUsize,
    repeat_visits: AtomicUsize,
    fetched: AtomicUsize,
    fetch_rejected: AtomicUsize,
    connection_failures: AtomicUsize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `event`
    pub fn record(&self, event: TaskEvent) {
        let counter = match event {
            TaskEvent::Spawned => &self.spawned,
            TaskEvent::Capped => &self.capped,
            TaskEvent::InvalidUrl => &self.invalid_urls,
            TaskEvent::External => &self.external,
            TaskEvent::RepeatVisit => &self.repeat_visits,
            TaskEvent::Fetched => &self.fetched,
            TaskEvent::FetchRejected => &self.fetch_rejected,
            TaskEvent::ConnectionFailure => &self.connection_failures,
        };
        // Counters are independent; no ordering with other memory is needed
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a plain copy of the counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            tasks_spawned: self.spawned.load(Ordering::Relaxed),
            capped: self.capped.load(Ordering::Relaxed),
            invalid_urls: self.invalid_urls.load(Ordering::Relaxed),
            external_skipped: self.external.load(Ordering::Relaxed),
            repeat_visits: self.repeat_visits.load(Ordering::Relaxed),
            pages_fetched: self.fetched.load(Ordering::Relaxed),
            fetch_rejected: self.fetch_rejected.load(Ordering::Relaxed),
            connection_failures: self.connection_failures.load(Ordering::Relaxed),
        }
    }
}

/// Crawl statistics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub tasks_spawned: usize,
    pub capped: usize,
    pub invalid_urls: usize,
    pub external_skipped: usize,
    pub repeat_visits: usize,
    pub pages_fetched: usize,
    pub fetch_rejected: usize,
    pub connection_failures: usize,
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tasks, {} pages fetched, {} repeat visits, {} external, {} rejected, \
             {} connection failures, {} invalid URLs, {} stopped by page cap",
            self.tasks_spawned,
            self.pages_fetched,
            self.repeat_visits,
            self.external_skipped,
            self.fetch_rejected,
            self.connection_failures,
            self.invalid_urls,
            self.capped
        )
    }
}
