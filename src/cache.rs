//! Remote Data Cache
//!
//! Keyed in-memory cache for server resources with optimistic mutation.
//!
//! Writes are last-write-wins: every `put`/`mutate` replaces the stored value
//! and bumps the key's revision. Two async flows that read, await and then
//! write the same key can overwrite each other; callers that care compare
//! revisions.
//!
//! Each key owns a reactive trigger. Readers inside a reactive scope call
//! `subscribe` and re-run only when that key changes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use leptos::prelude::{ArcTrigger, Notify, Track};

/// Resource identifier: endpoint path plus the token the data was fetched with
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: String,
    pub token: String,
}

impl CacheKey {
    pub fn new(path: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            token: token.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

struct Slot<V> {
    value: V,
    revision: u64,
}

struct Inner<V> {
    entries: DashMap<CacheKey, Slot<V>>,
    triggers: DashMap<CacheKey, ArcTrigger>,
    next_revision: AtomicU64,
}

/// Shared handle; clones see the same entries
pub struct ResourceCache<V> {
    inner: Arc<Inner<V>>,
}

impl<V> Clone for ResourceCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for ResourceCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ResourceCache<V> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: DashMap::new(),
                triggers: DashMap::new(),
                next_revision: AtomicU64::new(1),
            }),
        }
    }

    /// Track `key` in the current reactive scope; no-op outside one
    pub fn subscribe(&self, key: &CacheKey) {
        let trigger = self
            .inner
            .triggers
            .entry(key.clone())
            .or_insert_with(ArcTrigger::new)
            .value()
            .clone();
        trigger.track();
    }

    // Called after the entry guard is dropped so subscribers may read the cache.
    fn changed(&self, key: &CacheKey) {
        let trigger = self.inner.triggers.get(key).map(|t| t.value().clone());
        if let Some(trigger) = trigger {
            log::trace!("[CACHE] Changed: {}", key);
            trigger.notify();
        }
    }

    fn next_revision(&self) -> u64 {
        self.inner.next_revision.fetch_add(1, Ordering::Relaxed)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.inner.entries.contains_key(key)
    }

    /// Revision of the current value, `None` when nothing is cached
    #[cfg(test)]
    pub fn revision(&self, key: &CacheKey) -> Option<u64> {
        self.inner.entries.get(key).map(|slot| slot.revision)
    }

    /// Replace the value for `key`
    pub fn put(&self, key: &CacheKey, value: V) -> u64 {
        let revision = self.next_revision();
        self.inner.entries.insert(key.clone(), Slot { value, revision });
        self.changed(key);
        revision
    }

    /// Derive a new value from the current one.
    ///
    /// `f` runs under the entry's shard lock and must not touch this cache.
    /// Returning `None` leaves the entry untouched and skips notification.
    pub fn mutate<F>(&self, key: &CacheKey, f: F) -> Option<u64>
    where
        F: FnOnce(Option<&V>) -> Option<V>,
    {
        let revision = match self.inner.entries.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                let value = f(Some(&entry.get().value))?;
                let revision = self.next_revision();
                entry.insert(Slot { value, revision });
                revision
            }
            Entry::Vacant(entry) => {
                let value = f(None)?;
                let revision = self.next_revision();
                entry.insert(Slot { value, revision });
                revision
            }
        };
        self.changed(key);
        Some(revision)
    }

    /// Drop the value so the next reader refetches
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        let removed = self.inner.entries.remove(key).is_some();
        if removed {
            self.changed(key);
        }
        removed
    }
}

impl<V: Clone> ResourceCache<V> {
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        self.inner.entries.get(key).map(|slot| slot.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::{ArcMemo, GetUntracked};
    use std::sync::atomic::AtomicUsize;

    fn key() -> CacheKey {
        CacheKey::new("/category", "token")
    }

    #[test]
    fn test_put_get_and_revision() {
        let cache = ResourceCache::<Vec<u32>>::new();
        assert!(cache.get(&key()).is_none());
        assert!(cache.revision(&key()).is_none());

        let first = cache.put(&key(), vec![1]);
        let second = cache.put(&key(), vec![1, 2]);
        assert!(second > first);
        assert_eq!(cache.get(&key()), Some(vec![1, 2]));
        assert_eq!(cache.revision(&key()), Some(second));
    }

    #[test]
    fn test_keys_are_scoped_by_token() {
        let cache = ResourceCache::<u32>::new();
        cache.put(&CacheKey::new("/link", "a"), 1);
        cache.put(&CacheKey::new("/link", "b"), 2);
        assert_eq!(cache.get(&CacheKey::new("/link", "a")), Some(1));
        assert_eq!(cache.get(&CacheKey::new("/link", "b")), Some(2));
    }

    #[test]
    fn test_mutate_sees_current_value() {
        let cache = ResourceCache::<Vec<u32>>::new();
        cache.mutate(&key(), |current| {
            assert!(current.is_none());
            Some(vec![7])
        });
        cache.mutate(&key(), |current| {
            let mut next = current.cloned().unwrap_or_default();
            next.push(8);
            Some(next)
        });
        assert_eq!(cache.get(&key()), Some(vec![7, 8]));

        // None keeps the entry as is
        let before = cache.revision(&key());
        assert!(cache.mutate(&key(), |_| None).is_none());
        assert_eq!(cache.revision(&key()), before);
    }

    #[test]
    fn test_last_write_wins() {
        let cache = ResourceCache::<&'static str>::new();
        let shared = cache.clone();
        cache.put(&key(), "first writer");
        shared.put(&key(), "second writer");
        assert_eq!(cache.get(&key()), Some("second writer"));
    }

    #[test]
    fn test_invalidate() {
        let cache = ResourceCache::<u32>::new();
        cache.put(&key(), 1);
        assert!(cache.invalidate(&key()));
        assert!(!cache.invalidate(&key()));
        assert!(!cache.contains(&key()));
    }

    #[test]
    fn test_subscribers_rerun_only_for_their_key() {
        let cache = ResourceCache::<u32>::new();
        let other = CacheKey::new("/link", "token");
        let runs = Arc::new(AtomicUsize::new(0));

        let reader = cache.clone();
        let counter = Arc::clone(&runs);
        let watched = ArcMemo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            reader.subscribe(&key());
            reader.get(&key())
        });

        assert_eq!(watched.get_untracked(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        cache.put(&other, 5);
        assert_eq!(watched.get_untracked(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        cache.put(&key(), 3);
        assert_eq!(watched.get_untracked(), Some(3));
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        cache.mutate(&key(), |v| v.map(|n| n + 1));
        assert_eq!(watched.get_untracked(), Some(4));

        cache.invalidate(&key());
        assert_eq!(watched.get_untracked(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 4);
    }
}
