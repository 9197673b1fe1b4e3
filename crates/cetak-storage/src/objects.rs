// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem object store for uploaded design files.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::objects::ObjectStore;
use cetak_core::{AdapterType, CetakError, HealthStatus};

fn io_err(err: std::io::Error) -> CetakError {
    CetakError::Storage {
        source: Box::new(err),
    }
}

/// Stores uploaded files under a base directory; the returned reference is
/// the absolute file path.
pub struct FsObjectStore {
    base_dir: PathBuf,
}

impl FsObjectStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve an object path under the base directory, rejecting absolute
    /// paths and parent traversal.
    fn resolve(&self, path: &str) -> Result<PathBuf, CetakError> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if path.is_empty() || !safe {
            return Err(CetakError::Validation(format!(
                "invalid object path: {path}"
            )));
        }
        Ok(self.base_dir.join(relative))
    }
}

#[async_trait]
impl ServiceAdapter for FsObjectStore {
    fn name(&self) -> &str {
        "fs-objects"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::ObjectStore
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(io_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, CetakError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(&target, bytes).await.map_err(io_err)?;
        Ok(target.to_string_lossy().into_owned())
    }
}
