//! Query resolution: trigger detection, URL classification and destination
//! construction.

mod action;
mod classify;
mod encode;
mod trigger;

pub use action::{add_http_scheme, build, strip_trigger, Destination};
pub use classify::is_valid_url;
pub use encode::encode_component;
pub use trigger::accepts;

use crate::config::SurfConfig;

/// Runs the whole pipeline for one query against a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct QueryResolver {
    config: SurfConfig,
}

impl QueryResolver {
    /// Creates a resolver for the given configuration.
    #[must_use]
    pub const fn new(config: SurfConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SurfConfig {
        &self.config
    }

    /// Whether the query should be handled.
    #[must_use]
    pub fn accepts<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        accepts(terms, &self.config.triggers)
    }

    /// Builds the destination, assuming the query was accepted.
    #[must_use]
    pub fn build<S: AsRef<str>>(&self, terms: &[S]) -> Destination {
        build(terms, &self.config)
    }

    /// Builds the destination only if the query is accepted.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, terms: &[S]) -> Option<Destination> {
        self.accepts(terms).then(|| self.build(terms))
    }
}
