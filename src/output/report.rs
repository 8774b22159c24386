//! Plain-text crawl report
//!
//! The report lists every normalized URL once, in lexicographic order, with
//! the number of internal references counted for it.

use crate::state::PageCounts;
use std::io::{self, Write};

const RULE: &str = "=============================";

/// Writes the report for `base_url` to `out`
///
/// # Format
///
/// ```text
///
/// =============================
/// REPORT for https://blog.boot.dev
/// =============================
/// Found 3 internal links to blog.boot.dev/
/// Found 1 internal links to blog.boot.dev/path
/// ```
pub fn write_report<W: Write>(out: &mut W, base_url: &str, pages: &PageCounts) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "REPORT for {}", base_url)?;
    writeln!(out, "{}", RULE)?;

    for (url, count) in pages {
        writeln!(out, "Found {} internal links to {}", count, url)?;
    }

    Ok(())
}

/// Renders the report into a string
pub fn format_report(base_url: &str, pages: &PageCounts) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report(&mut buffer, base_url, pages);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Prints the report to stdout
pub fn print_report(base_url: &str, pages: &PageCounts) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, base_url, pages)?;
    out.flush()
}

/// Returns the sum of all visit counts
pub fn total_links(pages: &PageCounts) -> usize {
    pages.values().sum()
}
