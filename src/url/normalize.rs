use crate::url::{host_key, NormalizedUrl};
use crate::UrlError;
use url::{ParseError, Url};

/// Parses an absolute URL
///
/// # Errors
///
/// Returns `UrlError::Parse` if the string is not a syntactically valid
/// absolute URL.
pub fn parse_url(raw: &str) -> Result<Url, UrlError> {
    Url::parse(raw).map_err(|source| UrlError::Parse {
        url: raw.to_string(),
        source,
    })
}

/// Normalizes a URL string into its counting key
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed. A scheme-less `host/path` string
///    is read as `http://host/path`, so normalized keys normalize to
///    themselves.
/// 2. Take the host (lowercased) with any explicit non-default port
/// 3. Strip leading and trailing slashes from the path
/// 4. Append the raw query string with no `?` separator
///
/// The fragment and the scheme are dropped.
///
/// # Examples
///
/// ```
/// use linkcount::url::normalize_url;
///
/// let key = normalize_url("https://blog.boot.dev/path/").unwrap();
/// assert_eq!(key.as_str(), "blog.boot.dev/path");
///
/// let key = normalize_url("http://blog.boot.dev/path?sort=asc").unwrap();
/// assert_eq!(key.as_str(), "blog.boot.dev/pathsort=asc");
/// ```
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, UrlError> {
    let url = match Url::parse(raw) {
        // `localhost:3000/page` parses with `localhost` as the scheme
        Ok(url) if url.host().is_none() && is_host_port_key(raw) => {
            parse_url(&format!("http://{}", raw))?
        }
        Ok(url) => url,
        // Keys have no scheme; accept them back as input
        Err(ParseError::RelativeUrlWithoutBase) if !raw.is_empty() && !raw.starts_with('/') => {
            parse_url(&format!("http://{}", raw)).map_err(|_| UrlError::Parse {
                url: raw.to_string(),
                source: ParseError::RelativeUrlWithoutBase,
            })?
        }
        Err(source) => {
            return Err(UrlError::Parse {
                url: raw.to_string(),
                source,
            })
        }
    };

    normalize_parsed(&url)
}

/// Returns true for a scheme-less `host:port/...` key
fn is_host_port_key(raw: &str) -> bool {
    if raw.contains("://") {
        return false;
    }
    let Some((_, rest)) = raw.split_once(':') else {
        return false;
    };
    let port_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    port_len > 0 && rest[port_len..].starts_with('/')
}

/// Normalizes an already parsed URL
///
/// # Errors
///
/// Returns `UrlError::MissingHost` for URLs without a host, such as
/// `mailto:` links.
pub fn normalize_parsed(url: &Url) -> Result<NormalizedUrl, UrlError> {
    let host = host_key(url).ok_or_else(|| UrlError::MissingHost(url.to_string()))?;
    let path = url.path().trim_matches('/');
    let query = url.query().unwrap_or("");

    Ok(NormalizedUrl::new(format!("{}/{}{}", host, path, query)))
}
