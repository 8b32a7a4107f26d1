use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

use super::{DataSourceGroup, DataSourceProvider};
use crate::blueprint::{BlueprintGraph, NodeDefinition};

/// An id-keyed table of data-source providers, aggregated in priority order.
///
/// The registry is caller-owned: construct one at startup, register
/// providers, and pass it through the call chain. There is no process-wide
/// default instance and no internal synchronization; callers must not race
/// `register`/`unregister` against `all_data_sources` on the same instance.
pub struct ProviderRegistry {
    providers: AHashMap<String, Box<dyn DataSourceProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            providers: AHashMap::new(),
        }
    }

    /// Creates a registry with the three built-in providers registered:
    /// direct-dependency fields, transitive-dependency fields, and the
    /// default global context catalog.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::DirectDependencyProvider));
        registry.register(Box::new(super::TransitiveDependencyProvider));
        registry.register(Box::new(super::GlobalContextProvider::new()));
        registry
    }

    /// Registers a provider under its own id. Registering an already-used id
    /// replaces the prior entry (upsert, not an error).
    pub fn register(&mut self, provider: Box<dyn DataSourceProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    /// Removes the provider registered under `id`; a no-op on unknown ids.
    pub fn unregister(&mut self, id: &str) {
        self.providers.remove(id);
    }

    /// All registered providers, ordered by ascending priority. The relative
    /// order of equal-priority providers is unspecified.
    pub fn providers(&self) -> Vec<&dyn DataSourceProvider> {
        self.providers
            .values()
            .map(|provider| &**provider)
            .sorted_by_key(|provider| provider.priority())
            .collect()
    }

    /// Aggregates the groups of every applicable provider, in priority
    /// order, each provider's groups in its own internal order. Inapplicable
    /// and empty providers contribute nothing; this is never an error.
    pub fn all_data_sources(
        &self,
        node: &NodeDefinition,
        graph: &BlueprintGraph,
    ) -> Vec<DataSourceGroup> {
        let mut groups = Vec::new();
        for provider in self.providers() {
            if !provider.is_applicable(node, graph) {
                continue;
            }
            let contributed = provider.data_sources(node, graph);
            debug!(
                provider_id = provider.id(),
                node_id = %node.id,
                groups = contributed.len(),
                "provider contributed data-source groups"
            );
            groups.extend(contributed);
        }
        groups
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
