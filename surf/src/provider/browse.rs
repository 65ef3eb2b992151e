//! The search provider handed to the host surface.

use super::descriptor::{describe, limit, ResultDescriptor, RESULT_ID};
use super::SearchProvider;
use crate::config::{SettingsStore, SurfConfig};
use crate::launch::{open_uri, CommandSpawner, LaunchOutcome, UriLauncher};
use crate::observability::SpanTimer;
use crate::resolver::{accepts, build};

/// Provider that opens typed URLs or runs a web search.
///
/// Settings are re-read on every call so edits made while the provider is
/// registered apply to the next query.
#[derive(Debug)]
pub struct SurfSearchProvider<S, L, C> {
    settings: S,
    launcher: L,
    spawner: C,
}

impl<S, L, C> SurfSearchProvider<S, L, C>
where
    S: SettingsStore,
    L: UriLauncher,
    C: CommandSpawner,
{
    /// Creates a provider over the given collaborators.
    #[must_use]
    pub const fn new(settings: S, launcher: L, spawner: C) -> Self {
        Self {
            settings,
            launcher,
            spawner,
        }
    }

    /// Reads the current configuration.
    #[must_use]
    pub fn config(&self) -> SurfConfig {
        SurfConfig::from_store(&self.settings)
    }

    /// The settings store backing this provider.
    #[must_use]
    pub const fn settings(&self) -> &S {
        &self.settings
    }
}

impl<S, L, C> SearchProvider for SurfSearchProvider<S, L, C>
where
    S: SettingsStore,
    L: UriLauncher,
    C: CommandSpawner,
{
    fn id(&self) -> &str {
        RESULT_ID
    }

    fn initial_results(&self, terms: &[String]) -> Vec<String> {
        let config = self.config();
        if accepts(terms, &config.triggers) {
            tracing::debug!(?terms, "Query accepted");
            vec![RESULT_ID.to_string()]
        } else {
            Vec::new()
        }
    }

    fn subsearch_results(&self, _previous: &[String], _terms: &[String]) -> Vec<String> {
        Vec::new()
    }

    fn result_metas(&self, ids: &[String]) -> Vec<ResultDescriptor> {
        describe(ids)
    }

    fn filter_results(&self, results: Vec<String>, max: usize) -> Vec<String> {
        limit(results, max)
    }

    fn activate(&self, id: &str, terms: &[String]) -> LaunchOutcome {
        let timer = SpanTimer::start("activate");
        let destination = build(terms, &self.config());
        let outcome = open_uri(&self.launcher, &self.spawner, destination.uri());

        tracing::info!(
            result_id = id,
            kind = destination.kind(),
            uri = destination.uri(),
            ?outcome,
            duration_ms = timer.finish(),
            "Activated result"
        );
        outcome
    }
}
