//! Visit bookkeeping shared by all crawl tasks
//!
//! Every operation takes the same lock, and the lock is never held across an
//! await point.

use crate::url::NormalizedUrl;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Final visit counts, ordered lexicographically by normalized URL
pub type PageCounts = BTreeMap<NormalizedUrl, usize>;

/// Mapping from normalized URL to the number of times it was visited
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: Mutex<HashMap<NormalizedUrl, usize>>,
}

impl PageRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit of `url`
    ///
    /// Increments the stored count, inserting it with a count of 1 if absent.
    ///
    /// # Returns
    ///
    /// * `true` - This was the first visit; the caller owns crawling the page
    /// * `false` - The page was already recorded; only the count changed
    pub fn record_visit(&self, url: &NormalizedUrl) -> bool {
        let mut pages = self.lock();

        if let Some(count) = pages.get_mut(url) {
            *count += 1;
            return false;
        }

        pages.insert(url.clone(), 1);
        true
    }

    /// Returns the number of distinct pages recorded so far
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Returns the visit count for one page, if it was recorded
    pub fn count(&self, url: &str) -> Option<usize> {
        self.lock().get(url).copied()
    }

    /// Returns an ordered copy of all visit counts
    ///
    /// Only meaningful once the run's completion signal has fired; before
    /// that, concurrent tasks may still be recording visits.
    pub fn snapshot(&self) -> PageCounts {
        self.lock()
            .iter()
            .map(|(url, count)| (url.clone(), *count))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<NormalizedUrl, usize>> {
        // Each critical section leaves the map consistent, so a panic in
        // another holder does not invalidate it.
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
