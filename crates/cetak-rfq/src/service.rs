// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote-request submission pipeline.
//!
//! Submission runs in three steps: upload design files, persist the record,
//! notify the sales team. The first two are mandatory and abort the flow on
//! failure; notification is best effort and only logged.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use cetak_core::CetakError;
use cetak_core::traits::clock::Clock;
use cetak_core::traits::content::ContentStore;
use cetak_core::traits::notify::Notifier;
use cetak_core::traits::objects::ObjectStore;
use cetak_core::types::{RfqStatus, RfqSubmission};

use crate::draft::RfqDraft;

/// Orchestrates upload, persistence, and notification for quote requests.
pub struct RfqService {
    store: Arc<dyn ContentStore>,
    objects: Arc<dyn ObjectStore>,
    notifier: Option<Arc<dyn Notifier>>,
    clock: Arc<dyn Clock>,
}

impl RfqService {
    pub fn new(
        store: Arc<dyn ContentStore>,
        objects: Arc<dyn ObjectStore>,
        notifier: Option<Arc<dyn Notifier>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            objects,
            notifier,
            clock,
        }
    }

    /// Validates and submits a quote request.
    ///
    /// Design files are uploaded first so a persisted record never references
    /// a missing file. A notification failure after persistence is logged and
    /// does not fail the submission.
    pub async fn submit(&self, draft: RfqDraft) -> Result<RfqSubmission, CetakError> {
        draft.validate()?;

        let id = Uuid::new_v4().to_string();
        let mut design_file_refs = Vec::with_capacity(draft.design_files.len());
        for (index, file) in draft.design_files.iter().enumerate() {
            let path = format!("rfq/{id}/{}", object_name(index, &file.file_name));
            let reference =
                self.objects
                    .put(&path, &file.bytes)
                    .await
                    .map_err(|err| CetakError::Submission {
                        message: format!("design file upload failed: {}", file.file_name),
                        source: Some(Box::new(err)),
                    })?;
            design_file_refs.push(reference);
        }

        let submission = RfqSubmission {
            id,
            user_name: draft.user_name.trim().to_string(),
            user_email: draft.user_email.trim().to_string(),
            project_name: draft.project_name.trim().to_string(),
            product_category: draft.product_category,
            size_specifications: draft.size_specifications.trim().to_string(),
            quantity: draft.quantity,
            deadline: draft.deadline,
            design_file_refs,
            additional_notes: draft.additional_notes,
            estimated_cost_min: draft.estimated_cost_min,
            estimated_cost_max: draft.estimated_cost_max,
            currency: "IDR".to_string(),
            language: draft.language,
            status: RfqStatus::Pending,
            created_at: self.clock.now(),
        };

        self.store
            .insert_rfq(&submission)
            .await
            .map_err(|err| CetakError::Submission {
                message: "quote request could not be saved".to_string(),
                source: Some(Box::new(err)),
            })?;
        debug!(rfq_id = %submission.id, project = %submission.project_name, "rfq persisted");

        if let Some(notifier) = &self.notifier {
            if let Err(err) = notifier.notify_rfq(&submission).await {
                warn!(rfq_id = %submission.id, error = %err, "rfq notification failed");
            }
        }

        Ok(submission)
    }
}

/// Stable object name for the `index`-th design file, keeping the original
/// extension when there is one.
fn object_name(index: usize, file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("design_{index}.{}", ext.to_lowercase())
        }
        _ => format!("design_{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cetak_core::types::Language;
    use cetak_test_utils::{FixedClock, MemoryContentStore, MemoryObjectStore, RecordingNotifier};

    use crate::draft::DesignFile;

    fn draft() -> RfqDraft {
        RfqDraft {
            user_name: "Siti Rahma".into(),
            user_email: "siti@example.com".into(),
            project_name: "Company banners".into(),
            product_category: Some("banners".into()),
            size_specifications: "3m x 1m".into(),
            quantity: 10,
            language: Language::En,
            design_files: vec![DesignFile {
                file_name: "Banner Final.PNG".into(),
                mime_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            }],
            ..RfqDraft::default()
        }
    }

    struct Harness {
        store: Arc<MemoryContentStore>,
        objects: Arc<MemoryObjectStore>,
        notifier: Arc<RecordingNotifier>,
        service: RfqService,
    }

    fn harness() -> Harness {
        let store = Arc::new(MemoryContentStore::new());
        let objects = Arc::new(MemoryObjectStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let clock = Arc::new(FixedClock::at("2026-03-02T08:30:00Z"));
        let service = RfqService::new(
            store.clone(),
            objects.clone(),
            Some(notifier.clone()),
            clock,
        );
        Harness {
            store,
            objects,
            notifier,
            service,
        }
    }

    #[tokio::test]
    async fn submit_uploads_persists_and_notifies() {
        let h = harness();
        let submission = h.service.submit(draft()).await.unwrap();

        assert_eq!(submission.status, RfqStatus::Pending);
        assert_eq!(submission.currency, "IDR");
        assert_eq!(submission.created_at.to_rfc3339(), "2026-03-02T08:30:00+00:00");
        assert_eq!(submission.design_file_refs.len(), 1);
        assert!(submission.design_file_refs[0].ends_with("design_0.png"));

        assert_eq!(h.objects.len(), 1);
        let persisted = h.store.rfqs();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, submission.id);

        let notified = h.notifier.notified();
        assert_eq!(notified.len(), 1);
        assert_eq!(notified[0].project_name, "Company banners");
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_submission() {
        let h = harness();
        h.notifier.fail_next(true);

        let submission = h.service.submit(draft()).await.unwrap();
        assert_eq!(h.store.rfqs().len(), 1);
        assert_eq!(submission.status, RfqStatus::Pending);
    }

    #[tokio::test]
    async fn upload_failure_aborts_before_persistence() {
        let h = harness();
        h.objects.fail_next_puts(true);

        let err = h.service.submit(draft()).await.unwrap_err();
        assert!(matches!(err, CetakError::Submission { .. }));
        assert!(h.store.rfqs().is_empty());
        assert!(h.notifier.notified().is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_is_a_submission_error() {
        let h = harness();
        h.store.fail_next_writes(true);

        let err = h.service.submit(draft()).await.unwrap_err();
        assert!(matches!(err, CetakError::Submission { .. }));
        assert!(h.notifier.notified().is_empty());
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_before_any_side_effect() {
        let h = harness();
        let mut bad = draft();
        bad.user_email = "nope".into();

        let err = h.service.submit(bad).await.unwrap_err();
        assert!(matches!(err, CetakError::Validation(_)));
        assert!(h.objects.is_empty());
        assert!(h.store.rfqs().is_empty());
    }

    #[tokio::test]
    async fn missing_notifier_is_fine() {
        let store = Arc::new(MemoryContentStore::new());
        let objects = Arc::new(MemoryObjectStore::new());
        let service = RfqService::new(
            store.clone(),
            objects,
            None,
            Arc::new(FixedClock::at("2026-03-02T08:30:00Z")),
        );

        service.submit(draft()).await.unwrap();
        assert_eq!(store.rfqs().len(), 1);
    }

    #[test]
    fn object_names_keep_lowercased_extensions() {
        assert_eq!(object_name(0, "Logo.AI"), "design_0.ai");
        assert_eq!(object_name(2, "no-extension"), "design_2");
        assert_eq!(object_name(1, ".hidden"), "design_1");
    }
}
