// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote-request persistence.

use chrono::{DateTime, Utc};
use rusqlite::params;

use cetak_core::CetakError;
use cetak_core::types::{RfqStatus, RfqSubmission};

use crate::database::Database;
use crate::queries::conv_err;

const COLUMNS: &str = "id, user_name, user_email, project_name, product_category, \
                       size_specifications, quantity, deadline, design_file_refs, \
                       additional_notes, estimated_cost_min, estimated_cost_max, \
                       currency, language, status, created_at";

fn row_to_submission(row: &rusqlite::Row<'_>) -> rusqlite::Result<RfqSubmission> {
    let refs_json: String = row.get(8)?;
    let language_text: String = row.get(13)?;
    let status_text: String = row.get(14)?;
    let created_text: String = row.get(15)?;
    Ok(RfqSubmission {
        id: row.get(0)?,
        user_name: row.get(1)?,
        user_email: row.get(2)?,
        project_name: row.get(3)?,
        product_category: row.get(4)?,
        size_specifications: row.get(5)?,
        quantity: row.get(6)?,
        deadline: row.get(7)?,
        design_file_refs: serde_json::from_str(&refs_json).map_err(|e| conv_err(8, e))?,
        additional_notes: row.get(9)?,
        estimated_cost_min: row.get(10)?,
        estimated_cost_max: row.get(11)?,
        currency: row.get(12)?,
        language: language_text.parse().map_err(|e| conv_err(13, e))?,
        status: status_text.parse().map_err(|e| conv_err(14, e))?,
        created_at: DateTime::parse_from_rfc3339(&created_text)
            .map_err(|e| conv_err(15, e))?
            .with_timezone(&Utc),
    })
}

/// Insert one submission.
pub async fn insert(db: &Database, submission: &RfqSubmission) -> Result<(), CetakError> {
    let submission = submission.clone();
    let refs_json =
        serde_json::to_string(&submission.design_file_refs).map_err(|e| CetakError::Storage {
            source: Box::new(e),
        })?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                &format!(
                    "INSERT INTO rfq_submissions ({COLUMNS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
                ),
                params![
                    submission.id,
                    submission.user_name,
                    submission.user_email,
                    submission.project_name,
                    submission.product_category,
                    submission.size_specifications,
                    submission.quantity,
                    submission.deadline,
                    refs_json,
                    submission.additional_notes,
                    submission.estimated_cost_min,
                    submission.estimated_cost_max,
                    submission.currency,
                    submission.language.to_string(),
                    submission.status.to_string(),
                    submission.created_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Move one submission to a new lifecycle status.
pub async fn update_status(db: &Database, id: &str, status: RfqStatus) -> Result<(), CetakError> {
    let id = id.to_string();
    let affected = db
        .connection()
        .call(move |conn| {
            let affected = conn.execute(
                "UPDATE rfq_submissions SET status = ?2 WHERE id = ?1",
                params![id, status.to_string()],
            )?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    if affected == 0 {
        return Err(CetakError::Storage {
            source: "no submission with that id".into(),
        });
    }
    Ok(())
}

/// A page of submissions, newest first.
pub async fn list(db: &Database, limit: i64, offset: i64) -> Result<Vec<RfqSubmission>, CetakError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM rfq_submissions
                 ORDER BY created_at DESC LIMIT ?1 OFFSET ?2"
            ))?;
            let rows = stmt.query_map(params![limit, offset], row_to_submission)?;
            let mut submissions = Vec::new();
            for row in rows {
                submissions.push(row?);
            }
            Ok(submissions)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use cetak_core::types::Language;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("rfq.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn submission(id: &str, day: u32) -> RfqSubmission {
        RfqSubmission {
            id: id.to_string(),
            user_name: "Budi Santoso".to_string(),
            user_email: "budi@example.com".to_string(),
            project_name: "Brosur produk".to_string(),
            product_category: Some("brochures".to_string()),
            size_specifications: "A4, lipat tiga".to_string(),
            quantity: 500,
            deadline: Some("2026-04-01".to_string()),
            design_file_refs: vec![format!("uploads/rfq/{id}/design_0.pdf")],
            additional_notes: None,
            estimated_cost_min: Some(540_000),
            estimated_cost_max: Some(702_000),
            currency: "IDR".to_string(),
            language: Language::Id,
            status: RfqStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_and_list_roundtrips() {
        let (db, _dir) = setup_db().await;
        insert(&db, &submission("rfq-1", 2)).await.unwrap();

        let rows = list(&db, 10, 0).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], submission("rfq-1", 2));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn listing_is_newest_first_with_paging() {
        let (db, _dir) = setup_db().await;
        insert(&db, &submission("older", 1)).await.unwrap();
        insert(&db, &submission("newest", 9)).await.unwrap();
        insert(&db, &submission("middle", 5)).await.unwrap();

        let rows = list(&db, 2, 0).await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle"]);

        let rest = list(&db, 2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id, "older");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn status_transitions_persist() {
        let (db, _dir) = setup_db().await;
        insert(&db, &submission("rfq-1", 2)).await.unwrap();

        update_status(&db, "rfq-1", RfqStatus::Quoted).await.unwrap();
        let rows = list(&db, 1, 0).await.unwrap();
        assert_eq!(rows[0].status, RfqStatus::Quoted);

        assert!(update_status(&db, "ghost", RfqStatus::Quoted).await.is_err());
        db.close().await.unwrap();
    }
}
