// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all injected services implement.

use async_trait::async_trait;

use crate::error::CetakError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all Cetak service objects.
///
/// Every service the orchestrator depends on (generator, content store,
/// object store, notifier) is an explicitly constructed object implementing
/// this trait, so tests can substitute fakes without module-global state.
#[async_trait]
pub trait ServiceAdapter: Send + Sync + 'static {
    /// Human-readable name of this service instance.
    fn name(&self) -> &str;

    /// Semantic version of this service.
    fn version(&self) -> semver::Version;

    /// Kind of service (generator, content store, etc.).
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the service's current status.
    async fn health_check(&self) -> Result<HealthStatus, CetakError>;

    /// Gracefully shuts down the service, releasing any held resources.
    async fn shutdown(&self) -> Result<(), CetakError>;
}
