//! Enable/disable lifecycle for the provider.

use std::sync::Arc;

use super::{HostSearchSurface, SearchProvider};
use crate::errors::{RegistrationError, SurfResult};

/// Factory used to create the provider lazily on first enable.
pub type ProviderFactory = Box<dyn Fn() -> Arc<dyn SearchProvider> + Send + Sync>;

/// Owns the provider while it is registered with a host.
///
/// `enable` creates the provider on first use and registers it; `disable`
/// unregisters it and drops it. Both are idempotent.
pub struct SurfExtension {
    factory: ProviderFactory,
    provider: Option<Arc<dyn SearchProvider>>,
}

impl SurfExtension {
    /// Creates a disabled extension.
    #[must_use]
    pub fn new(factory: ProviderFactory) -> Self {
        Self {
            factory,
            provider: None,
        }
    }

    /// Whether the provider is currently registered.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// The registered provider, if enabled.
    #[must_use]
    pub fn provider(&self) -> Option<&Arc<dyn SearchProvider>> {
        self.provider.as_ref()
    }

    /// Creates the provider if needed and registers it with `host`.
    pub fn enable(&mut self, host: &dyn HostSearchSurface) -> SurfResult<()> {
        if self.provider.is_some() {
            return Ok(());
        }

        let provider = (self.factory)();
        host.register(Arc::clone(&provider))?;
        tracing::info!(provider_id = provider.id(), "Search provider enabled");
        self.provider = Some(provider);
        Ok(())
    }

    /// Unregisters the provider from `host` and drops it.
    ///
    /// A provider the host already forgot about is dropped without error.
    pub fn disable(&mut self, host: &dyn HostSearchSurface) -> SurfResult<()> {
        let Some(provider) = self.provider.take() else {
            return Ok(());
        };

        match host.unregister(provider.id()) {
            Ok(_) | Err(RegistrationError::NotRegistered(_)) => {
                tracing::info!(provider_id = provider.id(), "Search provider disabled");
                Ok(())
            }
            Err(e) => {
                self.provider = Some(provider);
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for SurfExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfExtension")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemorySettingsStore;
    use crate::errors::SurfError;
    use crate::provider::{ProviderRegistry, SurfSearchProvider};
    use crate::testing::{RecordingLauncher, RecordingSpawner};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn extension(created: Arc<AtomicUsize>) -> SurfExtension {
        SurfExtension::new(Box::new(move || -> Arc<dyn SearchProvider> {
            created.fetch_add(1, Ordering::SeqCst);
            Arc::new(SurfSearchProvider::new(
                MemorySettingsStore::new(),
                RecordingLauncher::new(true),
                RecordingSpawner::new(true),
            ))
        }))
    }

    #[test]
    fn test_enable_registers_once() {
        let created = Arc::new(AtomicUsize::new(0));
        let mut ext = extension(created.clone());
        let host = ProviderRegistry::new();

        ext.enable(&host).unwrap();
        ext.enable(&host).unwrap();

        assert!(ext.is_enabled());
        assert_eq!(host.list_providers(), vec!["surf"]);
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disable_unregisters() {
        let created = Arc::new(AtomicUsize::new(0));
        let mut ext = extension(created.clone());
        let host = ProviderRegistry::new();

        ext.enable(&host).unwrap();
        ext.disable(&host).unwrap();
        ext.disable(&host).unwrap();

        assert!(!ext.is_enabled());
        assert!(host.is_empty());

        ext.enable(&host).unwrap();
        assert_eq!(created.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_enable_conflict() {
        let created = Arc::new(AtomicUsize::new(0));
        let host = ProviderRegistry::new();
        let mut first = extension(created.clone());
        let mut second = extension(created);

        first.enable(&host).unwrap();
        let err = second.enable(&host).unwrap_err();
        assert!(matches!(err, SurfError::Registration(RegistrationError::AlreadyRegistered(_))));
        assert!(!second.is_enabled());
    }

    #[test]
    fn test_disable_after_host_forgot() {
        let created = Arc::new(AtomicUsize::new(0));
        let mut ext = extension(created);
        let host = ProviderRegistry::new();

        ext.enable(&host).unwrap();
        let _ = host.unregister("surf");
        ext.disable(&host).unwrap();
        assert!(!ext.is_enabled());
    }
}
