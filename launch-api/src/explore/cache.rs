//! Query cache port with predicate-scoped updates

use super::types::ExploreRequest;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Hierarchical cache key, matched by prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(pub Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// `["explore", "gems"]`, the prefix shared by every explore feed
    pub fn explore_root() -> Self {
        Self::new(["explore", "gems"])
    }

    /// `["explore", "gems", <request fingerprint>]`
    pub fn explore(request: &ExploreRequest) -> Self {
        let mut fingerprint = format!("tf={}", request.timeframe);
        for (name, value) in &request.filters {
            fingerprint.push_str(&format!("&{}={}", name, value));
        }
        Self::new(["explore".to_string(), "gems".to_string(), fingerprint])
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

/// Selects the entries an update applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub key: QueryKey,
    /// Only entries that currently have an observer
    pub active_only: bool,
}

impl QueryFilter {
    pub fn prefix(key: QueryKey) -> Self {
        Self {
            key,
            active_only: false,
        }
    }

    pub fn active(key: QueryKey) -> Self {
        Self {
            key,
            active_only: true,
        }
    }
}

/// Keyed cache of query results.
///
/// `update_matching` holds exclusive access for the whole pass, so readers
/// see either none or all of the rewritten entries.
pub trait QueryCache<V>: Send + Sync {
    fn get(&self, key: &QueryKey) -> Option<V>;

    fn set(&self, key: QueryKey, value: V);

    /// Register an observer of `key`; observed entries are active
    fn observe(&self, key: &QueryKey);

    fn unobserve(&self, key: &QueryKey);

    /// Rewrite every matching entry with `transform(previous)`. Returns how
    /// many entries were written.
    fn update_matching(
        &self,
        filter: &QueryFilter,
        transform: &mut dyn FnMut(Option<&V>) -> V,
    ) -> usize;
}

#[derive(Debug)]
struct CacheSlot<V> {
    value: Option<V>,
    observers: usize,
}

impl<V> Default for CacheSlot<V> {
    fn default() -> Self {
        Self {
            value: None,
            observers: 0,
        }
    }
}

/// In-process `QueryCache`
#[derive(Debug)]
pub struct MemoryQueryCache<V> {
    slots: RwLock<HashMap<QueryKey, CacheSlot<V>>>,
}

impl<V> Default for MemoryQueryCache<V> {
    fn default() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl<V> MemoryQueryCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking transform must not brick the cache
    fn read(&self) -> RwLockReadGuard<'_, HashMap<QueryKey, CacheSlot<V>>> {
        self.slots.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<QueryKey, CacheSlot<V>>> {
        self.slots.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.read().values().filter(|s| s.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone + Send + Sync> QueryCache<V> for MemoryQueryCache<V> {
    fn get(&self, key: &QueryKey) -> Option<V> {
        self.read().get(key).and_then(|slot| slot.value.clone())
    }

    fn set(&self, key: QueryKey, value: V) {
        self.write().entry(key).or_default().value = Some(value);
    }

    fn observe(&self, key: &QueryKey) {
        self.write().entry(key.clone()).or_default().observers += 1;
    }

    fn unobserve(&self, key: &QueryKey) {
        let mut slots = self.write();
        if let Some(slot) = slots.get_mut(key) {
            slot.observers = slot.observers.saturating_sub(1);
            if slot.observers == 0 && slot.value.is_none() {
                slots.remove(key);
            }
        }
    }

    fn update_matching(
        &self,
        filter: &QueryFilter,
        transform: &mut dyn FnMut(Option<&V>) -> V,
    ) -> usize {
        let mut slots = self.write();
        let mut written = 0;
        for (key, slot) in slots.iter_mut() {
            if !key.starts_with(&filter.key) {
                continue;
            }
            if filter.active_only && slot.observers == 0 {
                continue;
            }
            let next = transform(slot.value.as_ref());
            slot.value = Some(next);
            written += 1;
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::types::Timeframe;

    #[test]
    fn test_prefix_matching() {
        let key = QueryKey::explore(&ExploreRequest::new(Timeframe::OneHour));
        assert!(key.starts_with(&QueryKey::explore_root()));
        assert!(!QueryKey::new(["explore"]).starts_with(&key));
    }

    #[test]
    fn test_fingerprint_includes_filters() {
        let plain = QueryKey::explore(&ExploreRequest::new(Timeframe::OneHour));
        let filtered = QueryKey::explore(
            &ExploreRequest::new(Timeframe::OneHour).with_filter("minMcap", "1000"),
        );
        assert_ne!(plain, filtered);
        assert_eq!(plain.0[2], "tf=1h");
        assert_eq!(filtered.0[2], "tf=1h&minMcap=1000");
    }

    #[test]
    fn test_update_matching_respects_prefix_and_observers() {
        let cache = MemoryQueryCache::<u32>::new();
        let active = QueryKey::new(["explore", "gems", "a"]);
        let idle = QueryKey::new(["explore", "gems", "b"]);
        let other = QueryKey::new(["portfolio"]);
        cache.set(active.clone(), 1);
        cache.set(idle.clone(), 1);
        cache.set(other.clone(), 1);
        cache.observe(&active);

        let written = cache.update_matching(
            &QueryFilter::active(QueryKey::explore_root()),
            &mut |prev| prev.copied().unwrap_or(0) + 10,
        );
        assert_eq!(written, 1);
        assert_eq!(cache.get(&active), Some(11));
        assert_eq!(cache.get(&idle), Some(1));

        let written = cache.update_matching(
            &QueryFilter::prefix(QueryKey::explore_root()),
            &mut |prev| prev.copied().unwrap_or(0) + 1,
        );
        assert_eq!(written, 2);
        assert_eq!(cache.get(&other), Some(1));
    }

    #[test]
    fn test_observed_entry_without_value_receives_none() {
        let cache = MemoryQueryCache::<String>::new();
        let key = QueryKey::new(["explore", "gems", "x"]);
        cache.observe(&key);

        let mut seen = Vec::new();
        cache.update_matching(&QueryFilter::active(QueryKey::explore_root()), &mut |prev| {
            seen.push(prev.cloned());
            "filled".to_string()
        });

        assert_eq!(seen, vec![None]);
        assert_eq!(cache.get(&key).as_deref(), Some("filled"));
    }

    #[test]
    fn test_unobserve_drops_empty_slot() {
        let cache = MemoryQueryCache::<u8>::new();
        let key = QueryKey::new(["k"]);
        cache.observe(&key);
        cache.unobserve(&key);
        let written = cache.update_matching(&QueryFilter::prefix(QueryKey::new(["k"])), &mut |_| 0);
        assert_eq!(written, 0);
        assert!(cache.is_empty());
    }
}
