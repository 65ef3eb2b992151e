//! Provider registration.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use super::{ResultDescriptor, SearchProvider};
use crate::errors::RegistrationError;
use crate::launch::LaunchOutcome;

/// Registration contract implemented by a host search surface.
pub trait HostSearchSurface: Send + Sync {
    /// Registers a provider under its id.
    fn register(&self, provider: Arc<dyn SearchProvider>) -> Result<(), RegistrationError>;

    /// Unregisters the provider with the given id, returning it.
    fn unregister(&self, provider_id: &str) -> Result<Arc<dyn SearchProvider>, RegistrationError>;
}

/// Results one provider contributed to a query.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderResults {
    /// The provider id.
    pub provider_id: String,
    /// Result ids after filtering.
    pub ids: Vec<String>,
    /// Metadata for the result ids.
    pub metas: Vec<ResultDescriptor>,
}

/// An in-memory host that keeps providers in registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<Vec<Arc<dyn SearchProvider>>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a provider with this id is registered.
    #[must_use]
    pub fn contains(&self, provider_id: &str) -> bool {
        self.providers.read().iter().any(|p| p.id() == provider_id)
    }

    /// Lists registered provider ids in registration order.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.read().iter().map(|p| p.id().to_string()).collect()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Whether no provider is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }

    /// Runs a fresh query through every provider, the way a host does.
    ///
    /// Providers left with no result ids after filtering are left out.
    pub fn search(&self, terms: &[String], max_results: usize) -> Vec<ProviderResults> {
        let providers = self.providers.read().clone();

        providers
            .iter()
            .filter_map(|provider| {
                let ids = provider.initial_results(terms);
                if ids.is_empty() {
                    return None;
                }
                let ids = provider.filter_results(ids, max_results);
                if ids.is_empty() {
                    return None;
                }
                let metas = provider.result_metas(&ids);
                Some(ProviderResults {
                    provider_id: provider.id().to_string(),
                    ids,
                    metas,
                })
            })
            .collect()
    }

    /// Activates a result of the given provider.
    ///
    /// Returns `None` when the provider is not registered.
    pub fn activate(
        &self,
        provider_id: &str,
        result_id: &str,
        terms: &[String],
    ) -> Option<LaunchOutcome> {
        let provider = self
            .providers
            .read()
            .iter()
            .find(|p| p.id() == provider_id)
            .cloned()?;
        Some(provider.activate(result_id, terms))
    }
}

impl HostSearchSurface for ProviderRegistry {
    fn register(&self, provider: Arc<dyn SearchProvider>) -> Result<(), RegistrationError> {
        let mut providers = self.providers.write();
        let id = provider.id().to_string();
        if providers.iter().any(|p| p.id() == id) {
            return Err(RegistrationError::AlreadyRegistered(id));
        }

        tracing::debug!(provider_id = %id, "Registered search provider");
        providers.push(provider);
        Ok(())
    }

    fn unregister(&self, provider_id: &str) -> Result<Arc<dyn SearchProvider>, RegistrationError> {
        let mut providers = self.providers.write();
        let index = providers
            .iter()
            .position(|p| p.id() == provider_id)
            .ok_or_else(|| RegistrationError::NotRegistered(provider_id.to_string()))?;

        tracing::debug!(provider_id, "Unregistered search provider");
        Ok(providers.remove(index))
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.list_providers())
            .finish()
    }
}
