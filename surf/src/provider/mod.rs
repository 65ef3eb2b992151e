//! Integration with a host search surface.
//!
//! This module provides:
//! - The [`SearchProvider`] capability set a host drives
//! - [`SurfSearchProvider`], the provider built on the query resolver
//! - The [`HostSearchSurface`] registration contract and an in-memory host
//! - [`SurfExtension`], which registers and unregisters the provider

mod browse;
mod descriptor;
mod extension;
mod registry;

pub use browse::SurfSearchProvider;
pub use descriptor::{describe, limit, ResultDescriptor, RESULT_ID, SURF_RESULT};
pub use extension::{ProviderFactory, SurfExtension};
pub use registry::{HostSearchSurface, ProviderRegistry, ProviderResults};

use crate::launch::LaunchOutcome;

/// Capabilities a host search surface calls on a registered provider.
pub trait SearchProvider: Send + Sync {
    /// Stable provider id.
    fn id(&self) -> &str;

    /// Result ids for a fresh query.
    fn initial_results(&self, terms: &[String]) -> Vec<String>;

    /// Result ids refining a previous result set as the user keeps typing.
    fn subsearch_results(&self, previous: &[String], terms: &[String]) -> Vec<String>;

    /// Display metadata for result ids.
    fn result_metas(&self, ids: &[String]) -> Vec<ResultDescriptor>;

    /// Trims a result set to what the host will show.
    fn filter_results(&self, results: Vec<String>, max: usize) -> Vec<String>;

    /// Runs the action behind a result.
    fn activate(&self, id: &str, terms: &[String]) -> LaunchOutcome;
}
