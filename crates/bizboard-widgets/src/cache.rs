//! Keyed query cache shared by the widgets of one dashboard.
//!
//! Entries are type-erased (`Arc<dyn Any>`) so one cache can hold the
//! lists of every resource. Keys look like `invoices?skip=0&limit=100`, which
//! makes invalidating a whole resource a prefix match.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Default time an entry stays fresh.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(30);

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
}

/// In-memory cache with a fixed stale time.
pub struct QueryCache {
    entries: RwLock<HashMap<String, Entry>>,
    stale_after: Duration,
}

impl QueryCache {
    /// Cache whose entries are served for `stale_after`.
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stale_after,
        }
    }

    /// The configured stale time.
    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// Fresh value stored under `key`, if its type matches.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() >= self.stale_after {
            tracing::trace!(key, "Cache entry stale");
            return None;
        }
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn insert<T: Any + Send + Sync>(&self, key: impl Into<String>, value: Arc<T>) {
        let Ok(mut entries) = self.entries.write() else {
            tracing::warn!("Query cache lock poisoned, not caching");
            return;
        };
        entries.insert(
            key.into(),
            Entry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop every entry whose key starts with `prefix`. Returns how many.
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        tracing::debug!(prefix, removed, "Invalidated cache entries");
        removed
    }

    /// Drop everything.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.len())
            .field("stale_after", &self.stale_after)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let cache = QueryCache::default();
        cache.insert("invoices?skip=0", Arc::new(vec![1, 2, 3]));

        let hit: Arc<Vec<i32>> = cache.get("invoices?skip=0").unwrap();
        assert_eq!(*hit, vec![1, 2, 3]);
        assert!(cache.get::<Vec<i32>>("quotes?skip=0").is_none());
    }

    #[test]
    fn test_type_mismatch_misses() {
        let cache = QueryCache::default();
        cache.insert("k", Arc::new(5u8));
        assert!(cache.get::<String>("k").is_none());
    }

    #[test]
    fn test_zero_stale_time_never_hits() {
        let cache = QueryCache::new(Duration::ZERO);
        cache.insert("k", Arc::new(1));
        assert!(cache.get::<i32>("k").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_prefix() {
        let cache = QueryCache::default();
        cache.insert("expense-accounts?skip=0", Arc::new(1));
        cache.insert("expense-accounts?skip=100", Arc::new(2));
        cache.insert("employees?skip=0", Arc::new(3));

        assert_eq!(cache.invalidate_prefix("expense-accounts?"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get::<i32>("employees?skip=0").is_some());

        cache.clear();
        assert!(cache.is_empty());
    }
}
