// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier trait for the best-effort RFQ email side-channel.

use async_trait::async_trait;

use crate::error::CetakError;
use crate::traits::adapter::ServiceAdapter;
use crate::types::RfqSubmission;

/// Best-effort notification side-channel.
///
/// Failures here are logged by the caller and never roll back or block a
/// successful submission.
#[async_trait]
pub trait Notifier: ServiceAdapter {
    /// Notify the sales team that a quote request was submitted.
    async fn notify_rfq(&self, submission: &RfqSubmission) -> Result<(), CetakError>;
}
