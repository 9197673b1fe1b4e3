// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the ContentStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use cetak_config::model::StorageConfig;
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::content::ContentStore;
use cetak_core::types::{AiParameter, CatalogResponse, RfqStatus, RfqSubmission};
use cetak_core::{AdapterType, CetakError, HealthStatus};

use crate::database::Database;
use crate::queries;

/// SQLite-backed content store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily opened on the first call to
/// [`SqliteContentStore::initialize`].
pub struct SqliteContentStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteContentStore {
    /// Create a new store with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database at the configured path and run migrations.
    pub async fn initialize(&self) -> Result<(), CetakError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| CetakError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite content store initialized");
        Ok(())
    }

    fn db(&self) -> Result<&Database, CetakError> {
        self.db.get().ok_or_else(|| CetakError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl ServiceAdapter for SqliteContentStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::ContentStore
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        if let Some(db) = self.db.get() {
            db.close().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    async fn list_active_responses(&self) -> Result<Vec<CatalogResponse>, CetakError> {
        queries::responses::list_active(self.db()?).await
    }

    async fn insert_response(&self, record: &CatalogResponse) -> Result<(), CetakError> {
        queries::responses::insert(self.db()?, record).await
    }

    async fn update_response(&self, record: &CatalogResponse) -> Result<(), CetakError> {
        queries::responses::update(self.db()?, record).await
    }

    async fn list_active_ai_params(&self) -> Result<Vec<AiParameter>, CetakError> {
        queries::ai_config::list_active(self.db()?).await
    }

    async fn update_ai_param(&self, name: &str, value: f64) -> Result<(), CetakError> {
        queries::ai_config::update(self.db()?, name, value).await
    }

    async fn insert_rfq(&self, submission: &RfqSubmission) -> Result<(), CetakError> {
        queries::rfq::insert(self.db()?, submission).await
    }

    async fn update_rfq_status(&self, id: &str, status: RfqStatus) -> Result<(), CetakError> {
        queries::rfq::update_status(self.db()?, id, status).await
    }

    async fn list_rfq_submissions(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RfqSubmission>, CetakError> {
        queries::rfq::list(self.db()?, limit, offset).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn store_reports_adapter_identity() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("identity.db");
        let store = SqliteContentStore::new(make_config(db_path.to_str().unwrap()));

        assert_eq!(store.name(), "sqlite");
        assert_eq!(store.version(), semver::Version::new(0, 1, 0));
        assert_eq!(store.adapter_type(), AdapterType::ContentStore);
    }

    #[tokio::test]
    async fn initialize_opens_database_at_configured_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("init.db");
        let store = SqliteContentStore::new(make_config(db_path.to_str().unwrap()));

        store.initialize().await.unwrap();
        assert!(db_path.exists(), "database file should be created");
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("double.db");
        let store = SqliteContentStore::new(make_config(db_path.to_str().unwrap()));

        store.initialize().await.unwrap();
        assert!(store.initialize().await.is_err());
    }

    #[tokio::test]
    async fn health_check_fails_when_not_initialized() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("uninit.db");
        let store = SqliteContentStore::new(make_config(db_path.to_str().unwrap()));

        assert!(store.health_check().await.is_err());
    }

    #[tokio::test]
    async fn health_check_returns_healthy_when_initialized() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("health.db");
        let store = SqliteContentStore::new(make_config(db_path.to_str().unwrap()));

        store.initialize().await.unwrap();
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn seeded_catalog_is_visible_through_the_trait() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("seeded.db");
        let store = SqliteContentStore::new(make_config(db_path.to_str().unwrap()));
        store.initialize().await.unwrap();

        let rows = store.list_active_responses().await.unwrap();
        assert!(rows.iter().any(|r| r.id == "seed-greeting"));
        // Priority ordering holds across the seeded rows.
        assert!(rows.windows(2).all(|w| w[0].priority >= w[1].priority));

        let params = store.list_active_ai_params().await.unwrap();
        assert!(params.iter().any(|p| p.name == "top_k"));

        store.shutdown().await.unwrap();
    }
}
