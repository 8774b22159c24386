//! linkcount main entry point
//!
//! This is the command-line interface for the linkcount crawler.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use linkcount::config::{load_config, CrawlBudget};
use linkcount::crawler::run_crawl;
use linkcount::output::{print_report, total_links};
use linkcount::ConfigError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

const USAGE: &str = "usage: linkcount URL maxConcurrency maxPages";

/// linkcount: count internal links across a website
///
/// Crawls every page reachable from URL on the same host and reports how
/// many internal links point at each page.
#[derive(Parser, Debug)]
#[command(name = "linkcount")]
#[command(version)]
#[command(about = "Count internal links across a website", long_about = None)]
struct Cli {
    /// Seed URL; only pages on its host are crawled
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages fetched at the same time
    #[arg(value_name = "MAX_CONCURRENCY")]
    max_concurrency: usize,

    /// Stop starting new pages once this many have been recorded
    #[arg(value_name = "MAX_PAGES")]
    max_pages: usize,

    /// Optional TOML file with [http] and [user-agent] settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => usage_error(&e.to_string()),
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let base_url = match Url::parse(&cli.url) {
        Ok(url) if url.host_str().is_some() => url,
        _ => usage_error(&format!("Invalid URL: {}", cli.url)),
    };

    let budget = CrawlBudget::new(cli.max_concurrency, cli.max_pages);
    let config = match load_config(budget, cli.config.as_deref()) {
        Ok(config) => config,
        Err(ConfigError::Validation(message)) if cli.config.is_none() => usage_error(&message),
        Err(e) => {
            return Err(e).with_context(|| match &cli.config {
                Some(path) => format!("Failed to load configuration from {}", path.display()),
                None => "Invalid configuration".to_string(),
            })
        }
    };

    let outcome = run_crawl(base_url, config).await.context("Crawl failed")?;

    tracing::info!(
        "{} pages, {} internal links counted",
        outcome.pages.len(),
        total_links(&outcome.pages)
    );

    print_report(&cli.url, &outcome.pages).context("Failed to write report")?;

    Ok(())
}

/// Prints the reason and usage line, then exits with status 1
fn usage_error(reason: &str) -> ! {
    eprintln!("{}", reason.trim_end());
    eprintln!("{}", USAGE);
    std::process::exit(1)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the report on stdout can be piped.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkcount=info,warn"),
            1 => EnvFilter::new("linkcount=debug,info"),
            2 => EnvFilter::new("linkcount=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
