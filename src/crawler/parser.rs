//! HTML parser for extracting links
//!
//! Only `<a href="...">` elements are considered. Relative hrefs are resolved
//! by appending them to the run's link prefix (the base URL with an empty
//! path), so every returned string is absolute.

use scraper::{Html, Selector};
use url::{ParseError, Url};

/// Extracts every anchor href from an HTML document
///
/// Links are returned in document order. Duplicates are kept; each one counts
/// as a separate reference. Malformed markup yields whatever anchors the
/// parser recovers.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `prefix` - Scheme and host used to resolve relative hrefs, e.g. `https://blog.boot.dev`
///
/// # Example
///
/// ```
/// use linkcount::crawler::extract_links;
///
/// let html = r#"<a href="/page">Page</a><a href="https://other.com/">Other</a>"#;
/// let links = extract_links(html, "https://example.com");
/// assert_eq!(links, vec!["https://example.com/page", "https://other.com/"]);
/// ```
pub fn extract_links(html: &str, prefix: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_href(href, prefix) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves one href against the link prefix
///
/// Returns None for empty hrefs and hrefs that fail to parse for any reason
/// other than being relative.
fn resolve_href(href: &str, prefix: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match Url::parse(href) {
        Ok(_) => Some(href.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let prefix = prefix.trim_end_matches('/');
            if href.starts_with('/') {
                Some(format!("{}{}", prefix, href))
            } else {
                Some(format!("{}/{}", prefix, href))
            }
        }
        Err(e) => {
            tracing::debug!("Skipping unparsable href {:?}: {}", href, e);
            None
        }
    }
}
