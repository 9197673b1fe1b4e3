// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cached catalog of keyword-triggered responses.
//!
//! The catalog front-ends the content store with a short-lived cache so the
//! match step in the hot path never waits on storage more than once per
//! window. Store failures degrade to stale data, then to an empty catalog;
//! they never surface to the caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use cetak_core::traits::ContentStore;
use cetak_core::types::CatalogResponse;
use cetak_core::{CetakError, TtlCache};

/// How long a fetched catalog stays fresh.
const CATALOG_TTL: Duration = Duration::from_secs(5 * 60);

/// Keyword-matching front end over the content store.
pub struct ResponseCatalog {
    store: Arc<dyn ContentStore>,
    cache: TtlCache<Vec<CatalogResponse>>,
}

impl ResponseCatalog {
    /// Creates a catalog with the standard 5-minute cache window.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self::with_ttl(store, CATALOG_TTL)
    }

    /// Creates a catalog with a custom cache window (used by tests).
    pub fn with_ttl(store: Arc<dyn ContentStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: TtlCache::new(ttl),
        }
    }

    /// Returns the active catalog, sorted by priority descending.
    ///
    /// Serves from cache when fresh. On store failure, returns the last
    /// good snapshot if one exists, otherwise an empty list. A match miss
    /// is always recoverable by the generative fallback, so this method
    /// never fails.
    pub async fn fetch_all(&self, force_refresh: bool) -> Vec<CatalogResponse> {
        let store = Arc::clone(&self.store);
        let result: Result<Vec<CatalogResponse>, CetakError> = self
            .cache
            .get_or_load(force_refresh, move || {
                let store = Arc::clone(&store);
                async move { store.list_active_responses().await }
            })
            .await;

        match result {
            Ok(responses) => responses,
            Err(err) => {
                warn!(error = %err, "catalog fetch failed with no cached snapshot");
                Vec::new()
            }
        }
    }

    /// Finds the highest-priority record whose trigger appears in `input`.
    ///
    /// Matching is case-insensitive substring containment against each
    /// keyword trigger. Records are checked in priority order, so the first
    /// hit wins.
    pub async fn find_match(&self, input: &str) -> Option<CatalogResponse> {
        let needle = input.to_lowercase();
        let responses = self.fetch_all(false).await;

        for response in responses {
            let hit = response
                .keyword_triggers
                .iter()
                .any(|trigger| !trigger.is_empty() && needle.contains(&trigger.to_lowercase()));
            if hit {
                debug!(id = %response.id, "catalog match");
                return Some(response);
            }
        }

        None
    }

    /// Drops the cached snapshot so the next fetch hits the store.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cetak_core::types::ResponseType;
    use cetak_test_utils::MemoryContentStore;

    fn record(id: &str, triggers: &[&str], priority: i64) -> CatalogResponse {
        CatalogResponse {
            id: id.to_string(),
            keyword_triggers: triggers.iter().map(|s| s.to_string()).collect(),
            text_en: format!("{id} text"),
            text_id: format!("{id} teks"),
            text_ja: None,
            text_zh: None,
            text_ar: None,
            response_type: ResponseType::Static,
            priority,
            is_active: true,
            category: None,
        }
    }

    #[tokio::test]
    async fn match_is_case_insensitive_substring() {
        let store = Arc::new(MemoryContentStore::new());
        store.seed_responses(vec![record("hours", &["jam buka", "opening hours"], 10)]);
        let catalog = ResponseCatalog::new(store);

        let hit = catalog.find_match("Berapa JAM BUKA kantor?").await;
        assert_eq!(hit.unwrap().id, "hours");
    }

    #[tokio::test]
    async fn higher_priority_record_wins() {
        let store = Arc::new(MemoryContentStore::new());
        store.seed_responses(vec![
            record("specific", &["harga banner"], 20),
            record("generic", &["harga"], 5),
        ]);
        let catalog = ResponseCatalog::new(store);

        let hit = catalog.find_match("berapa harga banner 3x1?").await;
        assert_eq!(hit.unwrap().id, "specific");
    }

    #[tokio::test]
    async fn equal_priority_keeps_fetched_order() {
        let store = Arc::new(MemoryContentStore::new());
        store.seed_responses(vec![
            record("first", &["harga"], 10),
            record("second", &["harga"], 10),
        ]);
        let catalog = ResponseCatalog::new(store);

        let hit = catalog.find_match("berapa harga brosur?").await;
        assert_eq!(hit.unwrap().id, "first");
    }

    #[tokio::test]
    async fn no_trigger_means_no_match() {
        let store = Arc::new(MemoryContentStore::new());
        store.seed_responses(vec![record("hours", &["jam buka"], 10)]);
        let catalog = ResponseCatalog::new(store);

        assert!(catalog.find_match("apakah bisa cetak kaos?").await.is_none());
    }

    #[tokio::test]
    async fn store_failure_serves_stale_snapshot() {
        let store = Arc::new(MemoryContentStore::new());
        store.seed_responses(vec![record("hours", &["jam buka"], 10)]);
        let catalog = ResponseCatalog::with_ttl(store.clone(), Duration::ZERO);

        // Warm the cache, then make the store fail.
        assert_eq!(catalog.fetch_all(false).await.len(), 1);
        store.fail_next_reads(true);

        let responses = catalog.fetch_all(false).await;
        assert_eq!(responses.len(), 1, "stale snapshot should survive a failed refresh");
    }

    #[tokio::test]
    async fn store_failure_without_snapshot_yields_empty() {
        let store = Arc::new(MemoryContentStore::new());
        store.fail_next_reads(true);
        let catalog = ResponseCatalog::new(store);

        assert!(catalog.fetch_all(false).await.is_empty());
        assert!(catalog.find_match("halo").await.is_none());
    }

    #[tokio::test]
    async fn empty_trigger_never_matches() {
        let store = Arc::new(MemoryContentStore::new());
        store.seed_responses(vec![record("broken", &[""], 10)]);
        let catalog = ResponseCatalog::new(store);

        assert!(catalog.find_match("anything at all").await.is_none());
    }
}
