// In-memory snapshot cache with a single refresh gate.
// Readers see an immutable snapshot; at most one recompute runs at a time.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::FolioError;

/// Default freshness window: 2 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(2 * 60);

/// Snapshot of the cached value with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value, absent until the first successful refresh.
    pub data: Option<T>,
    /// Epoch milliseconds at which `data` was computed.
    pub timestamp: i64,
    /// Refresh attempts made when this snapshot was written.
    pub updates: u64,
}

impl<T> CacheEntry<T> {
    pub fn empty() -> Self {
        Self {
            data: None,
            timestamp: 0,
            updates: 0,
        }
    }

    /// Check if this entry holds data younger than `ttl` at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        self.data.is_some() && now.timestamp_millis() - self.timestamp < ttl_ms
    }
}

/// A failed refresh, carrying the attempt counter at the time of failure.
#[derive(Error, Debug)]
#[error("refresh attempt {updates} failed: {source}")]
pub struct RefreshError {
    #[source]
    pub source: FolioError,
    pub updates: u64,
}

/// Process-wide cache for a single recomputed value.
#[derive(Debug)]
pub struct RefreshCache<T> {
    ttl: Duration,
    snapshot: RwLock<Arc<CacheEntry<T>>>,
    gate: Mutex<()>,
    attempts: AtomicU64,
}

impl<T> RefreshCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            snapshot: RwLock::new(Arc::new(CacheEntry::empty())),
            gate: Mutex::new(()),
            attempts: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Refresh attempts so far, successful or not.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Current snapshot, fresh or not.
    pub fn snapshot(&self) -> Arc<CacheEntry<T>> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Current snapshot if it holds data within the freshness window.
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<Arc<CacheEntry<T>>> {
        let snapshot = self.snapshot();
        snapshot.is_fresh(now, self.ttl).then_some(snapshot)
    }

    /// Return the fresh snapshot, or run `refresh` and publish its result.
    ///
    /// The attempt counter is bumped before `refresh` runs, so a failed
    /// attempt advances `updates` without touching `data` or `timestamp`.
    /// A failure leaves the previous snapshot in place.
    pub async fn get_or_refresh<F, Fut>(
        &self,
        now: DateTime<Utc>,
        refresh: F,
    ) -> Result<Arc<CacheEntry<T>>, RefreshError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = crate::error::Result<T>>,
    {
        if let Some(entry) = self.fresh(now) {
            debug!(updates = entry.updates, "cache hit");
            return Ok(entry);
        }

        let _gate = self.gate.lock().await;

        // Another request may have refreshed while this one waited.
        if let Some(entry) = self.fresh(now) {
            debug!(updates = entry.updates, "cache refreshed by concurrent request");
            return Ok(entry);
        }

        let updates = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        info!(updates, "cache miss, recomputing");

        match refresh().await {
            Ok(data) => {
                let entry = Arc::new(CacheEntry {
                    data: Some(data),
                    timestamp: now.timestamp_millis(),
                    updates,
                });
                *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) =
                    Arc::clone(&entry);
                Ok(entry)
            }
            Err(source) => {
                warn!(updates, error = %source, "cache refresh failed");
                Err(RefreshError { source, updates })
            }
        }
    }
}
