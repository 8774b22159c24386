//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use linkcount::config::{Config, CrawlBudget};
use linkcount::crawler::run_crawl;
use linkcount::output::format_report;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a 200 response carrying an HTML document
fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html")
}

/// Mounts an HTML page at `page_path`
async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .mount(server)
        .await;
}

/// Host and port of the mock server, as used in visit count keys
fn host(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

fn base_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).expect("Failed to parse mock server URI")
}

fn config(max_concurrency: usize, max_pages: usize) -> Config {
    Config::new(CrawlBudget::new(max_concurrency, max_pages))
}

#[tokio::test]
async fn test_external_link_only() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="https://other.example.com/away">Away</a></body></html>"#,
    )
    .await;

    let outcome = run_crawl(base_url(&server), config(3, 10)).await.unwrap();

    assert_eq!(outcome.pages.len(), 1);
    assert_eq!(outcome.pages.get(format!("{}/", host(&server)).as_str()), Some(&1));
    assert_eq!(outcome.stats.external_skipped, 1);
    assert_eq!(outcome.stats.pages_fetched, 1);
}

#[tokio::test]
async fn test_relative_link_followed() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/path/one">One</a></body></html>"#,
    )
    .await;
    mount_page(&server, "/path/one", "<html><body>leaf</body></html>").await;

    let outcome = run_crawl(base_url(&server), config(3, 10)).await.unwrap();
    let host = host(&server);

    assert_eq!(outcome.pages.len(), 2);
    assert_eq!(outcome.pages.get(format!("{}/", host).as_str()), Some(&1));
    assert_eq!(outcome.pages.get(format!("{}/path/one", host).as_str()), Some(&1));
    assert_eq!(outcome.stats.pages_fetched, 2);
}

#[tokio::test]
async fn test_mixed_internal_and_external_links() {
    let server = MockServer::start().await;
    let body = format!(
        r#"<html><body>
        <a href="https://other.example.com/away">Away</a>
        <a href="{}/about">About</a>
        <a href="/contact">Contact</a>
        </body></html>"#,
        server.uri()
    );
    mount_page(&server, "/", &body).await;
    mount_page(&server, "/about", "<html><body>about</body></html>").await;
    mount_page(&server, "/contact", "<html><body>contact</body></html>").await;

    let outcome = run_crawl(base_url(&server), config(2, 10)).await.unwrap();
    let host = host(&server);

    assert_eq!(outcome.pages.len(), 3);
    assert_eq!(outcome.pages.get(format!("{}/about", host).as_str()), Some(&1));
    assert_eq!(outcome.pages.get(format!("{}/contact", host).as_str()), Some(&1));
    assert!(!outcome.pages.keys().any(|k| k.as_str().contains("other.example.com")));
    assert_eq!(outcome.stats.external_skipped, 1);
}

#[tokio::test]
async fn test_cycle_counts_every_reference() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<html><body><a href="/b">B</a></body></html>"#).await;
    mount_page(&server, "/b", r#"<html><body><a href="/">Home</a></body></html>"#).await;

    let outcome = run_crawl(base_url(&server), config(2, 10)).await.unwrap();
    let host = host(&server);

    assert_eq!(outcome.pages.get(format!("{}/", host).as_str()), Some(&2));
    assert_eq!(outcome.pages.get(format!("{}/b", host).as_str()), Some(&1));
    assert_eq!(outcome.stats.repeat_visits, 1);
    assert_eq!(outcome.stats.pages_fetched, 2);
}

#[tokio::test]
async fn test_duplicate_links_counted_and_fetched_once() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/dup">1</a><a href="/dup">2</a></body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/dup"))
        .respond_with(html("<html><body>dup</body></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = run_crawl(base_url(&server), config(4, 10)).await.unwrap();

    assert_eq!(outcome.pages.get(format!("{}/dup", host(&server)).as_str()), Some(&2));
    assert_eq!(outcome.total_visits(), 3);
    server.verify().await;
}

#[tokio::test]
async fn test_query_is_kept_without_separator() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/search?q=rust">Search</a></body></html>"#,
    )
    .await;
    mount_page(&server, "/search", "<html><body>results</body></html>").await;

    let outcome = run_crawl(base_url(&server), config(2, 10)).await.unwrap();

    assert_eq!(
        outcome.pages.get(format!("{}/searchq=rust", host(&server)).as_str()),
        Some(&1)
    );
}

#[tokio::test]
async fn test_rejected_pages_are_counted_but_not_expanded() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body>
        <a href="/missing">Missing</a>
        <a href="/logo.png">Logo</a>
        <a href="/broken">Broken</a>
        </body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw(
                r#"<html><body><a href="/secret-a">a</a></body></html>"#
                    .as_bytes()
                    .to_vec(),
                "text/html",
            ),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"<a href="/secret-b">b</a>"#.as_bytes().to_vec(),
                "image/png",
            ),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = run_crawl(base_url(&server), config(3, 10)).await.unwrap();
    let host = host(&server);

    assert_eq!(outcome.pages.len(), 4);
    assert_eq!(outcome.pages.get(format!("{}/missing", host).as_str()), Some(&1));
    assert_eq!(outcome.pages.get(format!("{}/logo.png", host).as_str()), Some(&1));
    assert_eq!(outcome.pages.get(format!("{}/broken", host).as_str()), Some(&1));
    assert!(!outcome.pages.keys().any(|k| k.as_str().contains("secret")));
    assert_eq!(outcome.stats.fetch_rejected, 3);
    assert_eq!(outcome.stats.connection_failures, 0);
}

/// Builds a root page linking to `n` distinct leaf pages
async fn mount_wide_site(server: &MockServer, n: usize) {
    let links: String = (0..n)
        .map(|i| format!(r#"<a href="/p{}">{}</a>"#, i, i))
        .collect();
    mount_page(server, "/", &format!("<html><body>{}</body></html>", links)).await;
    for i in 0..n {
        mount_page(server, &format!("/p{}", i), "<html><body>leaf</body></html>").await;
    }
}

#[tokio::test]
async fn test_page_cap_exact_with_single_worker() {
    let server = MockServer::start().await;
    mount_wide_site(&server, 20).await;

    let outcome = run_crawl(base_url(&server), config(1, 5)).await.unwrap();

    assert_eq!(outcome.pages.len(), 5);
    assert_eq!(outcome.stats.tasks_spawned, 21);
    assert_eq!(outcome.stats.capped, 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_page_cap_overshoot_is_bounded() {
    let server = MockServer::start().await;
    mount_wide_site(&server, 20).await;

    let outcome = run_crawl(base_url(&server), config(4, 5)).await.unwrap();

    // At most max_concurrency - 1 tasks can pass the cap check together
    assert!(outcome.pages.len() >= 5);
    assert!(outcome.pages.len() <= 8, "recorded {}", outcome.pages.len());
}

#[tokio::test]
async fn test_report_lists_every_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/b">B</a><a href="/a">A</a></body></html>"#,
    )
    .await;
    mount_page(&server, "/a", "<html><body>a</body></html>").await;
    mount_page(&server, "/b", "<html><body>b</body></html>").await;

    let outcome = run_crawl(base_url(&server), config(2, 10)).await.unwrap();
    let report = format_report(&server.uri(), &outcome.pages);
    let host = host(&server);

    assert!(report.contains(&format!("REPORT for {}", server.uri())));
    assert!(report.contains(&format!("Found 1 internal links to {}/", host)));
    assert!(report.contains(&format!("Found 1 internal links to {}/a", host)));
    assert!(report.contains(&format!("Found 1 internal links to {}/b", host)));
}
