//! Crawler coordinator - owns the shared state of one crawl run
//!
//! The coordinator builds a fresh registry, limiter, tracker and fetcher for
//! each run, seeds the first crawl task, waits for the task tree to drain and
//! hands back the final visit counts.

use crate::config::{validate, Config, CrawlBudget};
use crate::crawler::fetcher::HttpFetcher;
use crate::crawler::limiter::ConcurrencyLimiter;
use crate::crawler::task::{spawn_crawl, CrawlContext};
use crate::state::{CompletionTracker, PageCounts, PageRegistry, RunStats, StatsSnapshot};
use crate::url::{host_key, link_prefix};
use crate::UrlError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// How often progress is logged while waiting for the crawl to finish
const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Result of a completed crawl run
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Visit count per normalized URL, sorted by URL
    pub pages: PageCounts,

    /// What the crawl tasks did
    pub stats: StatsSnapshot,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlOutcome {
    /// Returns the sum of all visit counts
    pub fn total_visits(&self) -> usize {
        self.pages.values().sum()
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    ctx: Arc<CrawlContext>,
}

impl Coordinator {
    /// Creates a coordinator for a crawl starting at `base_url`
    ///
    /// # Arguments
    ///
    /// * `base_url` - The seed URL; its host bounds the crawl
    /// * `config` - Budget, HTTP and user agent settings
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - Invalid configuration, a seed without a host, or
    ///   an HTTP client that could not be built
    pub fn new(base_url: Url, config: Config) -> crate::Result<Self> {
        validate(&config)?;
        let fetcher = HttpFetcher::from_config(&config.http, &config.user_agent)?;
        Self::with_fetcher(base_url, config.budget, fetcher)
    }

    /// Creates a coordinator that uses an existing fetcher
    pub fn with_fetcher(
        base_url: Url,
        budget: CrawlBudget,
        fetcher: HttpFetcher,
    ) -> crate::Result<Self> {
        if host_key(&base_url).is_none() {
            return Err(UrlError::MissingHost(base_url.to_string()).into());
        }

        let ctx = CrawlContext {
            link_prefix: link_prefix(&base_url),
            base_url,
            budget,
            registry: PageRegistry::new(),
            limiter: ConcurrencyLimiter::new(budget.max_concurrency),
            tracker: CompletionTracker::new(),
            stats: RunStats::new(),
            fetcher,
        };

        Ok(Self { ctx: Arc::new(ctx) })
    }

    /// Runs the crawl to completion
    ///
    /// Seeds one task for the base URL, then waits until every spawned task,
    /// including those spawned by other tasks, has finished.
    pub async fn run(self) -> CrawlOutcome {
        let ctx = &self.ctx;
        tracing::info!(
            "Starting crawl of {} (max concurrency {}, max pages {})",
            ctx.base_url,
            ctx.budget.max_concurrency,
            ctx.budget.max_pages
        );

        let start_time = Instant::now();
        spawn_crawl(ctx, ctx.base_url.to_string());

        let finished = ctx.tracker.wait();
        tokio::pin!(finished);
        let mut progress = tokio::time::interval(PROGRESS_INTERVAL);
        // The first tick completes immediately
        progress.tick().await;

        loop {
            tokio::select! {
                _ = &mut finished => break,
                _ = progress.tick() => {
                    tracing::info!(
                        "Progress: {} pages recorded, {} tasks pending, {} permits free",
                        ctx.registry.size(),
                        ctx.tracker.pending(),
                        ctx.limiter.available()
                    );
                }
            }
        }

        let pages = ctx.registry.snapshot();
        let stats = ctx.stats.snapshot();
        let elapsed = start_time.elapsed();

        tracing::info!(
            "Crawl completed: {} pages in {:?} ({})",
            pages.len(),
            elapsed,
            stats
        );

        CrawlOutcome {
            pages,
            stats,
            elapsed,
        }
    }
}

/// Runs a complete crawl operation
///
/// # Example
///
/// ```no_run
/// use linkcount::config::{Config, CrawlBudget};
/// use linkcount::crawler::run_crawl;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let base = Url::parse("https://blog.boot.dev")?;
/// let outcome = run_crawl(base, Config::new(CrawlBudget::new(3, 25))).await?;
/// for (url, count) in &outcome.pages {
///     println!("{}: {}", url, count);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(base_url: Url, config: Config) -> crate::Result<CrawlOutcome> {
    let coordinator = Coordinator::new(base_url, config)?;
    Ok(coordinator.run().await)
}
