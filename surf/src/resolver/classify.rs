//! Syntactic URL classification.
//!
//! This is a shape check only. It never resolves or fetches anything, it
//! treats any alphabetic suffix of two or more letters as a top-level label,
//! it does not range-check IPv4 octets, and it rejects IPv6 literals and
//! internationalized host names.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

const SCHEME: &str = r"^(https?://)?";
const HOSTNAME: &str = r"(([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}";
const IPV4: &str = r"(\d{1,3}\.){3}\d{1,3}";
const PORT: &str = r"(:\d+)?";
const PATH: &str = r"(/[-a-z\d%_.~+]*)*";
const QUERY: &str = r"(\?[;&a-z\d%_.~+=-]*)?";
const FRAGMENT: &str = r"(#[-a-z\d_]*)?$";

static URL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let pattern = format!("{SCHEME}({HOSTNAME}|{IPV4}){PORT}{PATH}{QUERY}{FRAGMENT}");
    match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(error = %e, "URL pattern failed to compile");
            None
        }
    }
});

/// Whether `candidate` looks like a URL.
///
/// Accepts an optional `http://` or `https://` scheme, a dotted host name or
/// dotted quad, then an optional port, path, query string and fragment.
/// Case-insensitive.
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(candidate))
}
