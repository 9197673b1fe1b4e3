// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object store trait for design-file attachments.

use async_trait::async_trait;

use crate::error::CetakError;
use crate::traits::adapter::ServiceAdapter;

/// Blob storage: upload bytes under a path, receive a stable retrievable
/// reference. Used by the RFQ submission step, outside the core chat loop.
#[async_trait]
pub trait ObjectStore: ServiceAdapter {
    /// Store `bytes` under `path` and return the reference callers embed in
    /// persisted records.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, CetakError>;
}
