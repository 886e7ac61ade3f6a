//! Bounded sentiment cache keyed by normalized comment text

use crate::normalize::cache_key;
use commentpulse_core::SentimentLabel;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Default maximum number of cached labels
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Memoizes labels by trimmed, lowercased text.
///
/// Eviction is least-recently-inserted: once `capacity` entries are held, the
/// oldest key is dropped to make room. Lookups do not refresh an entry's age.
pub struct SentimentCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    labels: HashMap<String, SentimentLabel>,
    order: VecDeque<String>,
}

impl SentimentCache {
    /// Create a cache holding at most `capacity` labels (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Look up the label stored for `text`
    pub fn get(&self, text: &str) -> Option<SentimentLabel> {
        self.inner.lock().labels.get(&cache_key(text)).copied()
    }

    /// Store the label for `text`, evicting the oldest entry when full
    pub fn insert(&self, text: &str, label: SentimentLabel) {
        let key = cache_key(text);
        let mut inner = self.inner.lock();

        if let Some(existing) = inner.labels.get_mut(&key) {
            *existing = label;
            return;
        }

        while inner.order.len() >= self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.labels.remove(&oldest);
        }

        inner.order.push_back(key.clone());
        inner.labels.insert(key, label);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.labels.clear();
        inner.order.clear();
    }
}

impl Default for SentimentCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
