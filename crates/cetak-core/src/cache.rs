// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic TTL-cached loader.
//!
//! Both the response catalog (5 min) and the AI runtime config (10 min) are
//! read-through caches over the content store. This utility holds one value,
//! refreshes it through a caller-supplied async loader when the TTL lapses,
//! and keeps serving the stale value when a refresh fails — content reads are
//! soft dependencies.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

struct Entry<T> {
    value: T,
    loaded_at: Instant,
}

/// A single-slot cache that refreshes through a loader when expired.
///
/// Concurrent refreshes serialize on the internal lock; the last completed
/// load wins, which is acceptable for idempotent content reads.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value if fresher than the TTL, otherwise run
    /// `load`. On load failure, a stale value (if any) is returned instead
    /// of the error.
    pub async fn get_or_load<F, Fut, E>(&self, force_refresh: bool, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;

        if !force_refresh {
            if let Some(entry) = slot.as_ref() {
                if entry.loaded_at.elapsed() < self.ttl {
                    return Ok(entry.value.clone());
                }
            }
        }

        match load().await {
            Ok(value) => {
                *slot = Some(Entry {
                    value: value.clone(),
                    loaded_at: Instant::now(),
                });
                Ok(value)
            }
            Err(e) => match slot.as_ref() {
                Some(stale) => Ok(stale.value.clone()),
                None => Err(e),
            },
        }
    }

    /// Drop the cached value, forcing the next read through the loader.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    /// The current value regardless of freshness.
    pub async fn peek(&self) -> Option<T> {
        self.slot.lock().await.as_ref().map(|e| e.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[tokio::test]
    async fn fresh_value_skips_loader() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        let v = cache
            .get_or_load(false, || async { Ok::<_, Infallible>(1) })
            .await
            .unwrap();
        assert_eq!(v, 1);

        // Loader would return 2, but the cached 1 is still fresh.
        let v = cache
            .get_or_load(false, || async { Ok::<_, Infallible>(2) })
            .await
            .unwrap();
        assert_eq!(v, 1);
    }

    #[tokio::test]
    async fn expired_value_reloads() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::ZERO);
        let v = cache
            .get_or_load(false, || async { Ok::<_, Infallible>(1) })
            .await
            .unwrap();
        assert_eq!(v, 1);

        let v = cache
            .get_or_load(false, || async { Ok::<_, Infallible>(2) })
            .await
            .unwrap();
        assert_eq!(v, 2);
    }

    #[tokio::test]
    async fn force_refresh_bypasses_fresh_value() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        cache
            .get_or_load(false, || async { Ok::<_, Infallible>(1) })
            .await
            .unwrap();
        let v = cache
            .get_or_load(true, || async { Ok::<_, Infallible>(2) })
            .await
            .unwrap();
        assert_eq!(v, 2);
    }

    #[tokio::test]
    async fn load_failure_returns_stale_value() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::ZERO);
        cache
            .get_or_load(false, || async { Ok::<_, &str>(7) })
            .await
            .unwrap();

        // TTL is zero so the next read refreshes; the refresh fails and the
        // stale 7 is served.
        let v = cache
            .get_or_load(false, || async { Err::<u32, _>("store down") })
            .await
            .unwrap();
        assert_eq!(v, 7);
    }

    #[tokio::test]
    async fn load_failure_without_stale_value_errors() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        let res = cache
            .get_or_load(false, || async { Err::<u32, _>("store down") })
            .await;
        assert_eq!(res.unwrap_err(), "store down");
    }

    #[tokio::test]
    async fn invalidate_clears_slot() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        cache
            .get_or_load(false, || async { Ok::<_, Infallible>(1) })
            .await
            .unwrap();
        cache.invalidate().await;
        assert_eq!(cache.peek().await, None);
    }
}
