//! Asset cache keyed by file name.
//!
//! Backends load images lazily the first time a draw command names them;
//! later lookups hit the cache. A failed load is not cached, so the next
//! frame retries it.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct AssetCache<T> {
    entries: FxHashMap<String, T>,
}

impl<T> Default for AssetCache<T> {
    fn default() -> Self {
        AssetCache {
            entries: FxHashMap::default(),
        }
    }
}

impl<T> AssetCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, asset: T) {
        self.entries.insert(key.into(), asset);
    }

    /// Return the cached asset, calling `load` and caching its result on a miss.
    pub fn get_or_load<E, F>(&mut self, key: &str, load: F) -> Result<&T, E>
    where
        F: FnOnce(&str) -> Result<T, E>,
    {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let asset = load(key)?;
                Ok(entry.insert(asset))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_once() {
        let mut cache: AssetCache<usize> = AssetCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = cache
                .get_or_load::<(), _>("door.png", |k| {
                    calls += 1;
                    Ok(k.len())
                })
                .unwrap();
            assert_eq!(*v, 8);
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut cache: AssetCache<u8> = AssetCache::new();
        let err = cache.get_or_load("missing.png", |_| Err("nope"));
        assert_eq!(err, Err("nope"));
        assert!(!cache.contains("missing.png"));
        assert!(cache.is_empty());
    }
}
