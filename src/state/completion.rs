//! Termination detection for a dynamically growing set of tasks
//!
//! The total number of crawl tasks is unknown until the crawl ends, so the
//! tracker counts outstanding tasks instead of being sized up front. A task
//! must `add` for each child before it reports its own completion, otherwise
//! the count can touch zero while children are still being created.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Counts spawned-but-unfinished tasks and signals when none remain
#[derive(Debug, Default)]
pub struct CompletionTracker {
    /// Number of tasks added and not yet done
    pending: AtomicUsize,

    /// Set once the count has dropped back to zero
    finished: AtomicBool,

    /// Wakes waiters on the transition to zero
    notify: Notify,
}

impl CompletionTracker {
    /// Creates a tracker with no pending tasks
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `n` new tasks
    ///
    /// Must be called before the task is handed to the runtime.
    pub fn add(&self, n: usize) {
        if self.finished.load(Ordering::SeqCst) {
            tracing::error!("{} task(s) added after the run completed", n);
        }
        self.pending.fetch_add(n, Ordering::SeqCst);
    }

    /// Marks one task as finished
    pub fn done(&self) {
        match self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        {
            Ok(1) => {
                self.finished.store(true, Ordering::SeqCst);
                self.notify.notify_waiters();
            }
            Ok(_) => {}
            Err(_) => tracing::error!("done() called with no pending tasks"),
        }
    }

    /// Returns a guard that calls `done` when dropped
    pub fn guard(&self) -> TaskGuard<'_> {
        TaskGuard { tracker: self }
    }

    /// Returns the number of outstanding tasks
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Waits until the number of outstanding tasks reaches zero
    ///
    /// Returns immediately if nothing is pending.
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register interest before checking, so a zero-crossing between
            // the check and the await is not lost.
            notified.as_mut().enable();

            if self.pending.load(Ordering::SeqCst) == 0 {
                return;
            }

            notified.await;
        }
    }
}

/// Calls `CompletionTracker::done` exactly once, on every exit path
#[derive(Debug)]
pub struct TaskGuard<'a> {
    tracker: &'a CompletionTracker,
}

impl Drop for TaskGuard<'_> {
    fn drop(&mut self) {
        self.tracker.done();
    }
}
