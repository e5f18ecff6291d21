//! Shunt definition discovery.
//!
//! Definitions come from provider callbacks: any collaborator may register
//! a callback returning a `name -> description` mapping, and the registry
//! merges every contribution into one sorted set on first lookup. The
//! merged set is cached for the life of the registry; there is no reset.

use std::collections::BTreeMap;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

/// Ordered `name -> description` mapping. `BTreeMap` keeps the set sorted
/// by machine name, which every listing surface relies on.
pub type DefinitionMap = BTreeMap<String, String>;

type Provider = Box<dyn Fn() -> DefinitionMap + Send + Sync>;

/// Registry of shunt definitions.
///
/// Providers run once, in registration order, on the first call to
/// [`definitions`](Self::definitions); on a name collision the later
/// provider wins. The merged mapping is immutable afterwards.
pub struct DefinitionRegistry {
    providers: Vec<Provider>,
    cache: OnceCell<DefinitionMap>,
}

impl DefinitionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            cache: OnceCell::new(),
        }
    }

    /// Register a definition provider.
    ///
    /// Providers registered after the first lookup are ignored; the
    /// definition set is fixed once discovered.
    pub fn register<F>(&mut self, provider: F)
    where
        F: Fn() -> DefinitionMap + Send + Sync + 'static,
    {
        if self.cache.get().is_some() {
            warn!("definition provider registered after discovery; ignored");
            return;
        }
        self.providers.push(Box::new(provider));
    }

    /// All definitions, sorted by name. Providers run on the first call
    /// and the merged result is cached.
    pub fn definitions(&self) -> &DefinitionMap {
        self.cache.get_or_init(|| {
            let mut merged = DefinitionMap::new();
            for provider in &self.providers {
                for (name, description) in provider() {
                    merged.insert(name, description);
                }
            }
            debug!(count = merged.len(), "shunt definitions discovered");
            merged
        })
    }

    /// Whether `name` is a defined shunt.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions().contains_key(name)
    }

    /// Description for `name`, if defined.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.definitions().get(name).map(String::as_str)
    }

    /// All defined names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.definitions().keys().map(String::as_str).collect()
    }

    /// Number of defined shunts.
    pub fn len(&self) -> usize {
        self.definitions().len()
    }

    /// Whether no shunts are defined.
    pub fn is_empty(&self) -> bool {
        self.definitions().is_empty()
    }
}

impl Default for DefinitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
