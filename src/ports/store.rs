//! Key-value persistence.
//!
//! Stands in for browser local storage: one JSON value per key, last write
//! wins, no multi-key transactions. Features keep to their own key
//! (`user-game-scores`, `mood-history`).

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Synchronous key-value store.
pub trait KeyValueStore {
    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: Value);

    /// Drop the value under `key`.
    fn remove(&mut self, key: &str);
}

/// Read `key` as `T`, falling back to `T::default()` when the key is
/// missing or holds something that does not decode.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        None => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::warn!(key, error = %err, "discarding undecodable stored value");
            T::default()
        }),
    }
}

/// Write `value` under `key`.
pub fn save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(json) => store.set(key, json),
        Err(err) => tracing::warn!(key, error = %err, "value not serializable, skipping write"),
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set("k", json!(1));
        store.set("k", json!(2));
        assert_eq!(store.get("k"), Some(json!(2)));
        assert_eq!(store.len(), 1);

        store.remove("k");
        assert!(store.get("k").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_typed_helpers() {
        let mut store = MemoryStore::new();
        let missing: Vec<u32> = load_or_default(&store, "nums");
        assert!(missing.is_empty());

        save(&mut store, "nums", &vec![1u32, 2, 3]);
        let loaded: Vec<u32> = load_or_default(&store, "nums");
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupt_value_reads_as_default() {
        let mut store = MemoryStore::new();
        store.set("nums", json!("not a list"));
        let loaded: Vec<u32> = load_or_default(&store, "nums");
        assert!(loaded.is_empty());
    }
}
