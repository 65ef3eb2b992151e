//! Destination construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::classify::is_valid_url;
use super::encode::encode_component;
use crate::config::{SurfConfig, TriggerSet};

/// Where an activated query sends the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "uri", rename_all = "snake_case")]
pub enum Destination {
    /// A URL typed directly, with `http://` added when missing.
    Url(String),
    /// A search-engine request built from the configured template.
    Search(String),
}

impl Destination {
    /// The URI handed to the launcher.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Url(uri) | Self::Search(uri) => uri,
        }
    }

    /// Consumes the destination, returning its URI.
    #[must_use]
    pub fn into_uri(self) -> String {
        match self {
            Self::Url(uri) | Self::Search(uri) => uri,
        }
    }

    /// Whether this is a direct URL.
    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Search(_) => "search",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

/// Removes the trigger from the front of the terms.
///
/// A leading trigger character is peeled off a longer first term, leaving
/// the rest of that term in place. Otherwise the whole first term is taken to
/// be the trigger and dropped.
pub fn strip_trigger(terms: &mut Vec<String>, triggers: &TriggerSet) {
    let Some(first) = terms.first_mut() else {
        return;
    };

    let mut chars = first.chars();
    match chars.next() {
        Some(c) if chars.next().is_some() && triggers.contains_char(c) => {
            first.replace_range(..c.len_utf8(), "");
        }
        _ => {
            terms.remove(0);
        }
    }
}

/// Prefixes `http://` unless the candidate already starts with `http`.
///
/// Only the first four characters are inspected; `httpfoo.com` is left as it
/// is.
#[must_use]
pub fn add_http_scheme(url: &str) -> String {
    let has_scheme = url
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("http"));

    if has_scheme {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Builds the destination for an accepted query.
///
/// The terms still carry their trigger. A single remaining term that looks
/// like a URL is opened directly; anything else is joined with spaces,
/// encoded and appended to the search template. Never fails: with nothing
/// left after the trigger the result is the bare template.
#[must_use]
pub fn build<S: AsRef<str>>(terms: &[S], config: &SurfConfig) -> Destination {
    let mut remaining: Vec<String> = terms.iter().map(|t| t.as_ref().to_string()).collect();
    strip_trigger(&mut remaining, &config.triggers);

    if let [candidate] = remaining.as_slice() {
        if is_valid_url(candidate) {
            let destination = Destination::Url(add_http_scheme(candidate));
            tracing::debug!(uri = %destination, "Query classified as URL");
            return destination;
        }
    }

    let query = remaining.join(" ");
    let destination = Destination::Search(format!(
        "{}{}",
        config.search_url,
        encode_component(&query)
    ));
    tracing::debug!(uri = %destination, term_count = remaining.len(), "Query classified as search");
    destination
}
