//! The fixed result identity and result-list helpers.

use serde::Serialize;

/// Id of the single synthetic result this provider produces.
pub const RESULT_ID: &str = "surf";

/// Metadata identifying the provider's result to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultDescriptor {
    /// Result id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display description.
    pub description: &'static str,
}

/// The one descriptor there is.
pub const SURF_RESULT: ResultDescriptor = ResultDescriptor {
    id: RESULT_ID,
    name: "Browse:",
    description: "Visit URL or perform a web search with the terms provided",
};

/// Describes the given result ids.
///
/// There is exactly one result identity, so the ids are not inspected.
#[must_use]
pub fn describe<S: AsRef<str>>(_ids: &[S]) -> Vec<ResultDescriptor> {
    vec![SURF_RESULT]
}

/// Keeps at most `max` results, preserving their order.
#[must_use]
pub fn limit<T>(mut results: Vec<T>, max: usize) -> Vec<T> {
    results.truncate(max);
    results
}
