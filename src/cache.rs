//! TTL-based in-memory cache for fetched collections
//!
//! One cache instance per collection type, keyed by fetch intent (plain
//! collection fetches and per-term variants share an instance). Each key has
//! a single slot guarded by an async mutex held across the fetch, so
//! concurrent callers for the same key share one in-flight request. Values
//! are whole-collection snapshots behind `Arc`; nothing is ever mutated in
//! place. A failed refresh surfaces the error and keeps the stale snapshot;
//! the next access retries. Refresh is always lazy, there is no background
//! task.

use crate::error::AppError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex as AsyncMutex;

struct Slot<T> {
    value: Option<Arc<Vec<T>>>,
    fetched_at: Option<Instant>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: None,
            fetched_at: None,
        }
    }
}

/// Time-to-live cache over immutable collection snapshots.
pub struct CollectionCache<T> {
    ttl: Duration,
    slots: Mutex<HashMap<String, Arc<AsyncMutex<Slot<T>>>>>,
}

impl<T> CollectionCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, key: &str) -> Arc<AsyncMutex<Slot<T>>> {
        let mut slots = self.slots.lock();
        slots.entry(key.to_string()).or_default().clone()
    }

    /// Return the cached snapshot for `key`, fetching through `fetch` when
    /// the slot is empty or its TTL has elapsed.
    ///
    /// Single-flight: the slot lock is held for the duration of the fetch,
    /// so a concurrent caller waits and then observes the fresh value
    /// instead of fetching again.
    pub async fn get_with<F, Fut>(&self, key: &str, fetch: F) -> Result<Arc<Vec<T>>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, AppError>>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        if let (Some(value), Some(at)) = (&guard.value, guard.fetched_at) {
            if at.elapsed() < self.ttl {
                tracing::debug!(key, "cache hit");
                return Ok(Arc::clone(value));
            }
            tracing::debug!(key, "cache expired, refetching");
        } else {
            tracing::debug!(key, "cache miss, fetching");
        }

        match fetch().await {
            Ok(items) => {
                let snapshot = Arc::new(items);
                guard.value = Some(Arc::clone(&snapshot));
                guard.fetched_at = Some(Instant::now());
                Ok(snapshot)
            }
            Err(e) => {
                // Stale snapshot stays in place; the next access retries.
                tracing::warn!(key, error = %e, "collection fetch failed");
                Err(e)
            }
        }
    }

    /// Peek at the last successfully fetched snapshot, ignoring TTL.
    pub fn cached(&self, key: &str) -> Option<Arc<Vec<T>>> {
        let slots = self.slots.lock();
        let slot = slots.get(key)?;
        let guard = slot.try_lock().ok()?;
        guard.value.as_ref().map(Arc::clone)
    }

    /// Drop a key's snapshot so the next access refetches.
    pub fn invalidate(&self, key: &str) {
        let mut slots = self.slots.lock();
        slots.remove(key);
        tracing::debug!(key, "cache invalidated");
    }

    /// Drop every snapshot.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }
}
