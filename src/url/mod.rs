//! URL handling module for linkcount
//!
//! This module provides the normalized key used to count pages, plus the
//! host comparison that decides which links are internal.

mod domain;
mod normalize;

use std::borrow::Borrow;
use std::fmt;

// Re-export main functions
pub use domain::{host_key, link_prefix, same_host};
pub use normalize::{normalize_parsed, normalize_url, parse_url};

/// Canonical string form of a URL, used as the dedup and count key
///
/// The key is `host + "/" + path-without-edge-slashes + raw-query`. Scheme,
/// fragment and trailing slashes do not take part in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedUrl {
    fn borrow(&self) -> &str {
        &self.0
    }
}
