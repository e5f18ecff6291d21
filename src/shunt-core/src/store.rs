//! Persisted status state.
//!
//! Each shunt's status is one boolean in a key/value variable store, keyed
//! by [`variable_key`]. The store sits behind the [`VariableStore`] trait
//! so the backend is swappable; [`MemoryStore`] is the in-process one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;

/// Namespace prefix for persisted shunt variables.
pub const VARIABLE_PREFIX: &str = "shunt_";

/// Variable-store key for a shunt name. Deterministic, and distinct names
/// always map to distinct keys.
pub fn variable_key(name: &str) -> String {
    format!("{VARIABLE_PREFIX}{name}")
}

/// Typed boundary around the persisted variable store.
///
/// Values are per-key booleans and an absent key reads as `false`. Writes
/// are only as atomic as the backend makes them; nothing here layers
/// transactions on top.
pub trait VariableStore: Send {
    /// Read the boolean stored at `key`; absent keys read as `false`.
    fn get(&self, key: &str) -> Result<bool>;

    /// Persist `value` at `key`.
    fn set(&mut self, key: &str, value: bool) -> Result<()>;
}

/// In-process store for tests and embedders that do not need durability.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// observe writes made through the controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, bool>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls served, overwrites included.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VariableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<bool> {
        Ok(self.lock().values.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        let mut inner = self.lock();
        inner.values.insert(key.to_string(), value);
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variable_key_is_prefixed() {
        assert_eq!(variable_key("search"), "shunt_search");
        assert_eq!(variable_key("user_uploads"), "shunt_user_uploads");
    }

    #[test]
    fn absent_key_reads_false() {
        let store = MemoryStore::new();
        assert!(!store.get("shunt_missing").unwrap());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.set("shunt_search", true).unwrap();
        assert!(store.get("shunt_search").unwrap());

        store.set("shunt_search", false).unwrap();
        assert!(!store.get("shunt_search").unwrap());
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn clones_share_state() {
        let mut store = MemoryStore::new();
        let observer = store.clone();

        store.set("shunt_search", true).unwrap();
        assert!(observer.get("shunt_search").unwrap());
        assert_eq!(observer.writes(), 1);
    }
}
