//! Global concurrency limiting for crawl tasks
//!
//! Any number of crawl tasks may exist at once; the limiter bounds how many of
//! them are past admission and doing fetch or parse work. Waiters are not
//! served in any guaranteed order.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting admission gate with a fixed number of permits
#[derive(Debug)]
pub struct ConcurrencyLimiter {
    /// Global semaphore for limiting concurrent work
    semaphore: Arc<Semaphore>,

    /// Number of permits the limiter was created with
    max_concurrency: usize,
}

/// A granted permit; released when dropped
#[derive(Debug)]
pub struct CrawlPermit {
    _permit: OwnedSemaphorePermit,
}

impl ConcurrencyLimiter {
    /// Creates a limiter with `max_concurrency` permits
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrency)),
            max_concurrency,
        }
    }

    /// Waits for a permit
    ///
    /// # Returns
    ///
    /// * `Some(CrawlPermit)` - Admission granted
    /// * `None` - The limiter was closed
    pub async fn acquire(&self) -> Option<CrawlPermit> {
        let permit = self.semaphore.clone().acquire_owned().await.ok()?;
        Some(CrawlPermit { _permit: permit })
    }

    /// Returns the number of permits not currently held
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Returns the configured number of permits
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}
