// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime generation parameters loaded from the content store.
//!
//! Operators tune sampling parameters through the same row store that holds
//! the catalog. Values are cached for ten minutes; a failed load falls back
//! to the last snapshot, then to compiled defaults, so generation is never
//! blocked on storage.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use cetak_core::traits::ContentStore;
use cetak_core::types::GenerationParams;
use cetak_core::{CetakError, TtlCache};

/// How long loaded parameters stay fresh.
const AI_CONFIG_TTL: Duration = Duration::from_secs(10 * 60);

/// Cached loader for tunable generation parameters.
pub struct AiConfigLoader {
    store: Arc<dyn ContentStore>,
    cache: TtlCache<GenerationParams>,
}

impl AiConfigLoader {
    /// Creates a loader with the standard 10-minute cache window.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self::with_ttl(store, AI_CONFIG_TTL)
    }

    /// Creates a loader with a custom cache window (used by tests).
    pub fn with_ttl(store: Arc<dyn ContentStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: TtlCache::new(ttl),
        }
    }

    /// Returns the effective generation parameters.
    ///
    /// Known parameter names override the compiled defaults; unknown or
    /// inactive rows are ignored. Never fails: store errors degrade to the
    /// last snapshot or the defaults.
    pub async fn generation_params(&self, force_refresh: bool) -> GenerationParams {
        let store = Arc::clone(&self.store);
        let result: Result<GenerationParams, CetakError> = self
            .cache
            .get_or_load(force_refresh, move || {
                let store = Arc::clone(&store);
                async move {
                    let rows = store.list_active_ai_params().await?;
                    let mut params = GenerationParams::default();
                    for row in rows {
                        match row.name.as_str() {
                            "temperature" => params.temperature = row.value,
                            "top_p" => params.top_p = row.value,
                            "top_k" => match count_param(row.value) {
                                Some(value) => params.top_k = value,
                                None => debug!(value = row.value, "ignoring out-of-range top_k"),
                            },
                            "max_output_tokens" => match count_param(row.value) {
                                Some(value) => params.max_output_tokens = value,
                                None => debug!(
                                    value = row.value,
                                    "ignoring out-of-range max_output_tokens"
                                ),
                            },
                            other => debug!(name = other, "ignoring unknown ai parameter"),
                        }
                    }
                    Ok(params)
                }
            })
            .await;

        match result {
            Ok(params) => params,
            Err(err) => {
                warn!(error = %err, "ai config load failed, using defaults");
                GenerationParams::default()
            }
        }
    }

    /// Drops the cached parameters so the next read hits the store.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}

/// Stored values are REAL columns; a count parameter is only usable when it
/// fits in a u32.
fn count_param(value: f64) -> Option<u32> {
    if value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}
