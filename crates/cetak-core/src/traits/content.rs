// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content store trait: the generic row store behind the response catalog,
//! AI runtime config, and RFQ submissions.

use async_trait::async_trait;

use crate::error::CetakError;
use crate::traits::adapter::ServiceAdapter;
use crate::types::{AiParameter, CatalogResponse, RfqStatus, RfqSubmission};

/// Row-store operations required by the assistant.
///
/// The only shapes needed are "select active rows ordered by priority",
/// "insert one row", and "update one row by id" — no transactions or joins.
#[async_trait]
pub trait ContentStore: ServiceAdapter {
    /// Active catalog records, sorted by priority descending. Rows with equal
    /// priority keep store insertion order.
    async fn list_active_responses(&self) -> Result<Vec<CatalogResponse>, CetakError>;

    /// Insert one catalog record.
    async fn insert_response(&self, record: &CatalogResponse) -> Result<(), CetakError>;

    /// Replace one catalog record by id.
    async fn update_response(&self, record: &CatalogResponse) -> Result<(), CetakError>;

    /// Active AI runtime parameters.
    async fn list_active_ai_params(&self) -> Result<Vec<AiParameter>, CetakError>;

    /// Update one AI runtime parameter by name.
    async fn update_ai_param(&self, name: &str, value: f64) -> Result<(), CetakError>;

    /// Persist one immutable quote-request record.
    async fn insert_rfq(&self, submission: &RfqSubmission) -> Result<(), CetakError>;

    /// Update one quote request's status by id.
    async fn update_rfq_status(&self, id: &str, status: RfqStatus) -> Result<(), CetakError>;

    /// Recent quote requests, newest first.
    async fn list_rfq_submissions(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RfqSubmission>, CetakError>;
}
