// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned-response catalog operations.

use rusqlite::params;

use cetak_core::CetakError;
use cetak_core::types::CatalogResponse;

use crate::database::Database;
use crate::queries::conv_err;

fn row_to_response(row: &rusqlite::Row<'_>) -> rusqlite::Result<CatalogResponse> {
    let triggers_json: String = row.get(1)?;
    let response_type_text: String = row.get(7)?;
    Ok(CatalogResponse {
        id: row.get(0)?,
        keyword_triggers: serde_json::from_str(&triggers_json).map_err(|e| conv_err(1, e))?,
        text_en: row.get(2)?,
        text_id: row.get(3)?,
        text_ja: row.get(4)?,
        text_zh: row.get(5)?,
        text_ar: row.get(6)?,
        response_type: response_type_text.parse().map_err(|e| conv_err(7, e))?,
        priority: row.get(8)?,
        is_active: row.get(9)?,
        category: row.get(10)?,
    })
}

const COLUMNS: &str = "id, keyword_triggers, text_en, text_id, text_ja, text_zh, text_ar, \
                       response_type, priority, is_active, category";

/// Active catalog rows, priority descending, insertion order within a tie.
pub async fn list_active(db: &Database) -> Result<Vec<CatalogResponse>, CetakError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM chatbot_responses
                 WHERE is_active = 1 ORDER BY priority DESC, rowid ASC"
            ))?;
            let rows = stmt.query_map([], row_to_response)?;
            let mut responses = Vec::new();
            for row in rows {
                responses.push(row?);
            }
            Ok(responses)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert one catalog row.
pub async fn insert(db: &Database, record: &CatalogResponse) -> Result<(), CetakError> {
    let record = record.clone();
    let triggers_json =
        serde_json::to_string(&record.keyword_triggers).map_err(|e| CetakError::Storage {
            source: Box::new(e),
        })?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO chatbot_responses
                 (id, keyword_triggers, text_en, text_id, text_ja, text_zh, text_ar,
                  response_type, priority, is_active, category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    record.id,
                    triggers_json,
                    record.text_en,
                    record.text_id,
                    record.text_ja,
                    record.text_zh,
                    record.text_ar,
                    record.response_type.to_string(),
                    record.priority,
                    record.is_active,
                    record.category,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Replace one catalog row by id.
pub async fn update(db: &Database, record: &CatalogResponse) -> Result<(), CetakError> {
    let record = record.clone();
    let triggers_json =
        serde_json::to_string(&record.keyword_triggers).map_err(|e| CetakError::Storage {
            source: Box::new(e),
        })?;
    let affected = db
        .connection()
        .call(move |conn| {
            let affected = conn.execute(
                "UPDATE chatbot_responses SET
                 keyword_triggers = ?2, text_en = ?3, text_id = ?4, text_ja = ?5,
                 text_zh = ?6, text_ar = ?7, response_type = ?8, priority = ?9,
                 is_active = ?10, category = ?11
                 WHERE id = ?1",
                params![
                    record.id,
                    triggers_json,
                    record.text_en,
                    record.text_id,
                    record.text_ja,
                    record.text_zh,
                    record.text_ar,
                    record.response_type.to_string(),
                    record.priority,
                    record.is_active,
                    record.category,
                ],
            )?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    if affected == 0 {
        return Err(CetakError::Storage {
            source: "no catalog row with that id".into(),
        });
    }
    Ok(())
}
