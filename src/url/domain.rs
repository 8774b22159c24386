use url::Url;

/// Returns the host of a URL together with any explicit non-default port
///
/// This is the value compared to decide whether a link is internal, and the
/// leading part of every normalized key.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkcount::url::host_key;
///
/// let url = Url::parse("https://Example.com/path").unwrap();
/// assert_eq!(host_key(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(host_key(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Returns true if both URLs have a host and the hosts (with ports) match
pub fn same_host(base: &Url, candidate: &Url) -> bool {
    match (host_key(base), host_key(candidate)) {
        (Some(base), Some(candidate)) => base == candidate,
        _ => false,
    }
}

/// Returns the base URL with an empty path, e.g. `https://blog.boot.dev`
///
/// Relative hrefs are resolved by appending them to this prefix.
pub fn link_prefix(base: &Url) -> String {
    match host_key(base) {
        Some(host) => format!("{}://{}", base.scheme(), host),
        None => base.scheme().to_string() + ":",
    }
}
