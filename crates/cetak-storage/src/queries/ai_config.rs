// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AI runtime parameter operations.

use rusqlite::params;

use cetak_core::CetakError;
use cetak_core::types::AiParameter;

use crate::database::Database;

/// Active parameter rows.
pub async fn list_active(db: &Database) -> Result<Vec<AiParameter>, CetakError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT name, value, is_active FROM ai_config
                 WHERE is_active = 1 ORDER BY name ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(AiParameter {
                    name: row.get(0)?,
                    value: row.get(1)?,
                    is_active: row.get(2)?,
                })
            })?;
            let mut params = Vec::new();
            for row in rows {
                params.push(row?);
            }
            Ok(params)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set one parameter's value by name.
pub async fn update(db: &Database, name: &str, value: f64) -> Result<(), CetakError> {
    let name = name.to_string();
    let affected = db
        .connection()
        .call(move |conn| {
            let affected = conn.execute(
                "UPDATE ai_config SET value = ?2 WHERE name = ?1",
                params![name, value],
            )?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    if affected == 0 {
        return Err(CetakError::Storage {
            source: "no ai parameter with that name".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn defaults_are_seeded_and_updatable() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("ai.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        let params = list_active(&db).await.unwrap();
        let temp = params.iter().find(|p| p.name == "temperature").unwrap();
        assert!((temp.value - 0.4).abs() < f64::EPSILON);

        update(&db, "temperature", 0.7).await.unwrap();
        let params = list_active(&db).await.unwrap();
        let temp = params.iter().find(|p| p.name == "temperature").unwrap();
        assert!((temp.value - 0.7).abs() < f64::EPSILON);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn updating_unknown_parameter_fails() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("ai_unknown.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        assert!(update(&db, "no-such-knob", 1.0).await.is_err());
        db.close().await.unwrap();
    }
}
