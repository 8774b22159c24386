//! The recursive unit of crawl work
//!
//! Each discovered link becomes its own tokio task. A task registers itself
//! with the completion tracker before it is spawned and reports completion
//! through a guard, so the tracker reaches zero only when the whole task tree
//! has finished.

use crate::config::CrawlBudget;
use crate::crawler::fetcher::HttpFetcher;
use crate::crawler::limiter::ConcurrencyLimiter;
use crate::crawler::parser::extract_links;
use crate::state::{CompletionTracker, PageRegistry, RunStats, TaskEvent};
use crate::url::{normalize_parsed, parse_url, same_host};
use std::sync::Arc;
use url::Url;

/// State shared by every task of one crawl run
#[derive(Debug)]
pub(crate) struct CrawlContext {
    /// The seed URL; only links on its host are crawled
    pub base_url: Url,

    /// Scheme and host used to resolve relative hrefs
    pub link_prefix: String,

    pub budget: CrawlBudget,
    pub registry: PageRegistry,
    pub limiter: ConcurrencyLimiter,
    pub tracker: CompletionTracker,
    pub stats: RunStats,
    pub fetcher: HttpFetcher,
}

/// Registers a new task for `raw_url` and hands it to the runtime
///
/// The tracker is incremented before the spawn, while the caller is still
/// pending, so the count cannot reach zero in between.
pub(crate) fn spawn_crawl(ctx: &Arc<CrawlContext>, raw_url: String) {
    ctx.tracker.add(1);
    ctx.stats.record(TaskEvent::Spawned);

    let ctx = Arc::clone(ctx);
    tokio::spawn(async move {
        crawl_page(ctx, raw_url).await;
    });
}

/// Crawls one URL
///
/// Every early return is a normal outcome: errors are logged and counted
/// here and never reported upward.
async fn crawl_page(ctx: Arc<CrawlContext>, raw_url: String) {
    let _done = ctx.tracker.guard();

    let Some(_permit) = ctx.limiter.acquire().await else {
        tracing::error!("Concurrency limiter closed, dropping {}", raw_url);
        return;
    };

    // Soft cap: tasks already past this check may still register a page
    if ctx.registry.size() >= ctx.budget.max_pages {
        tracing::trace!("Page cap reached, skipping {}", raw_url);
        ctx.stats.record(TaskEvent::Capped);
        return;
    }

    let url = match parse_url(&raw_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Error parsing {}: {}", raw_url, e);
            ctx.stats.record(TaskEvent::InvalidUrl);
            return;
        }
    };

    if !same_host(&ctx.base_url, &url) {
        tracing::trace!("Skipping external link {}", url);
        ctx.stats.record(TaskEvent::External);
        return;
    }

    let key = match normalize_parsed(&url) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!("Error normalizing {}: {}", url, e);
            ctx.stats.record(TaskEvent::InvalidUrl);
            return;
        }
    };

    if !ctx.registry.record_visit(&key) {
        ctx.stats.record(TaskEvent::RepeatVisit);
        return;
    }

    tracing::debug!("Crawling {}", url);

    let body = match ctx.fetcher.fetch(&url).await {
        Ok(body) => body,
        Err(e) if e.is_connection() => {
            tracing::warn!("{}", e);
            ctx.stats.record(TaskEvent::ConnectionFailure);
            return;
        }
        Err(e) => {
            tracing::debug!("Not expanding {}: {}", key, e);
            ctx.stats.record(TaskEvent::FetchRejected);
            return;
        }
    };

    let links = extract_links(&body, &ctx.link_prefix);
    ctx.stats.record(TaskEvent::Fetched);
    tracing::debug!("Found {} links on {}", links.len(), url);

    for link in links {
        spawn_crawl(&ctx, link);
    }
}
