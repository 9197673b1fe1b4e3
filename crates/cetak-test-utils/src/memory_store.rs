// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory content and object stores for deterministic testing.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use cetak_core::CetakError;
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::content::ContentStore;
use cetak_core::traits::objects::ObjectStore;
use cetak_core::types::{
    AdapterType, AiParameter, CatalogResponse, HealthStatus, RfqStatus, RfqSubmission,
};

fn storage_err(what: &str) -> CetakError {
    CetakError::Storage {
        source: Box::new(std::io::Error::other(what.to_string())),
    }
}

/// An in-memory `ContentStore` with seeding helpers and failure injection.
#[derive(Default)]
pub struct MemoryContentStore {
    responses: Mutex<Vec<CatalogResponse>>,
    ai_params: Mutex<Vec<AiParameter>>,
    rfqs: Mutex<Vec<RfqSubmission>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog contents.
    pub fn seed_responses(&self, responses: Vec<CatalogResponse>) {
        *self.responses.lock().expect("lock poisoned") = responses;
    }

    /// Replace the AI parameter rows.
    pub fn seed_ai_params(&self, params: Vec<AiParameter>) {
        *self.ai_params.lock().expect("lock poisoned") = params;
    }

    /// Make all subsequent reads fail until cleared.
    pub fn fail_next_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make all subsequent writes fail until cleared.
    pub fn fail_next_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// All persisted quote requests, insertion order.
    pub fn rfqs(&self) -> Vec<RfqSubmission> {
        self.rfqs.lock().expect("lock poisoned").clone()
    }

    fn check_read(&self) -> Result<(), CetakError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(storage_err("injected read failure"))
        } else {
            Ok(())
        }
    }

    fn check_write(&self) -> Result<(), CetakError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(storage_err("injected write failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ServiceAdapter for MemoryContentStore {
    fn name(&self) -> &str {
        "memory-content-store"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::ContentStore
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn list_active_responses(&self) -> Result<Vec<CatalogResponse>, CetakError> {
        self.check_read()?;
        let mut rows: Vec<_> = self
            .responses
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        rows.sort_by_key(|r| std::cmp::Reverse(r.priority));
        Ok(rows)
    }

    async fn insert_response(&self, record: &CatalogResponse) -> Result<(), CetakError> {
        self.check_write()?;
        self.responses
            .lock()
            .expect("lock poisoned")
            .push(record.clone());
        Ok(())
    }

    async fn update_response(&self, record: &CatalogResponse) -> Result<(), CetakError> {
        self.check_write()?;
        let mut rows = self.responses.lock().expect("lock poisoned");
        match rows.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(storage_err("no such response")),
        }
    }

    async fn list_active_ai_params(&self) -> Result<Vec<AiParameter>, CetakError> {
        self.check_read()?;
        Ok(self
            .ai_params
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }

    async fn update_ai_param(&self, name: &str, value: f64) -> Result<(), CetakError> {
        self.check_write()?;
        let mut rows = self.ai_params.lock().expect("lock poisoned");
        match rows.iter_mut().find(|p| p.name == name) {
            Some(param) => {
                param.value = value;
                Ok(())
            }
            None => Err(storage_err("no such parameter")),
        }
    }

    async fn insert_rfq(&self, submission: &RfqSubmission) -> Result<(), CetakError> {
        self.check_write()?;
        self.rfqs
            .lock()
            .expect("lock poisoned")
            .push(submission.clone());
        Ok(())
    }

    async fn update_rfq_status(&self, id: &str, status: RfqStatus) -> Result<(), CetakError> {
        self.check_write()?;
        let mut rows = self.rfqs.lock().expect("lock poisoned");
        match rows.iter_mut().find(|r| r.id == id) {
            Some(rfq) => {
                rfq.status = status;
                Ok(())
            }
            None => Err(storage_err("no such submission")),
        }
    }

    async fn list_rfq_submissions(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RfqSubmission>, CetakError> {
        self.check_read()?;
        let mut rows = self.rfqs.lock().expect("lock poisoned").clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

/// An in-memory `ObjectStore` returning `mem://` references.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_puts: AtomicBool,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make all subsequent puts fail until cleared.
    pub fn fail_next_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    /// The stored bytes for a reference, if any.
    pub fn get(&self, reference: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("lock poisoned")
            .get(reference)
            .cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ServiceAdapter for MemoryObjectStore {
    fn name(&self) -> &str {
        "memory-object-store"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::ObjectStore
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, CetakError> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(storage_err("injected put failure"));
        }
        let reference = format!("mem://{path}");
        self.objects
            .lock()
            .expect("lock poisoned")
            .insert(reference.clone(), bytes.to_vec());
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cetak_core::types::ResponseType;

    fn record(id: &str, priority: i64, active: bool) -> CatalogResponse {
        CatalogResponse {
            id: id.to_string(),
            keyword_triggers: vec!["x".to_string()],
            text_en: String::new(),
            text_id: String::new(),
            text_ja: None,
            text_zh: None,
            text_ar: None,
            response_type: ResponseType::Static,
            priority,
            is_active: active,
            category: None,
        }
    }

    #[tokio::test]
    async fn inactive_rows_are_filtered_and_priority_sorts() {
        let store = MemoryContentStore::new();
        store.seed_responses(vec![
            record("low", 1, true),
            record("hidden", 99, false),
            record("high", 10, true),
        ]);

        let rows = store.list_active_responses().await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low"]);
    }

    #[tokio::test]
    async fn injected_read_failure_propagates() {
        let store = MemoryContentStore::new();
        store.fail_next_reads(true);
        assert!(store.list_active_responses().await.is_err());
        store.fail_next_reads(false);
        assert!(store.list_active_responses().await.is_ok());
    }

    #[tokio::test]
    async fn object_store_round_trip() {
        let store = MemoryObjectStore::new();
        let reference = store.put("rfq/abc/design.png", b"bytes").await.unwrap();
        assert_eq!(reference, "mem://rfq/abc/design.png");
        assert_eq!(store.get(&reference).unwrap(), b"bytes");
    }
}
