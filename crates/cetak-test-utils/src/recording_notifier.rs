// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording notifier for asserting on the RFQ side-channel.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use cetak_core::CetakError;
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::notify::Notifier;
use cetak_core::types::{AdapterType, HealthStatus, RfqSubmission};

/// A notifier that records every submission it is asked to send.
///
/// With `fail_next(true)` it errors instead, for exercising the
/// notification-failure path.
#[derive(Default)]
pub struct RecordingNotifier {
    notified: Mutex<Vec<RfqSubmission>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent notifications fail until cleared.
    pub fn fail_next(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Submissions notified so far, in order.
    pub fn notified(&self) -> Vec<RfqSubmission> {
        self.notified.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ServiceAdapter for RecordingNotifier {
    fn name(&self) -> &str {
        "recording-notifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_rfq(&self, submission: &RfqSubmission) -> Result<(), CetakError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CetakError::Submission {
                message: "injected notification failure".to_string(),
                source: None,
            });
        }
        self.notified
            .lock()
            .expect("lock poisoned")
            .push(submission.clone());
        Ok(())
    }
}
