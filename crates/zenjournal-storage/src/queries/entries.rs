// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Journal entry CRUD operations.
//!
//! Every statement is scoped by `user_id`; there is no unscoped read or
//! write path in this module.

use chrono::NaiveDate;
use rusqlite::params;
use zenjournal_core::JournalError;
use zenjournal_core::types::JournalEntry;

use crate::database::{Database, map_tr_err};

const ENTRY_COLUMNS: &str = "id, user_id, title, content, date, mood, ai_insight, tags";

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<JournalEntry> {
    let date_str: String = row.get(4)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    // A NULL tags column reads as an empty list.
    let tags_json: Option<String> = row.get(7)?;
    let tags = match tags_json {
        Some(json) => serde_json::from_str(&json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
        })?,
        None => Vec::new(),
    };

    Ok(JournalEntry {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        date,
        mood: row.get(5)?,
        ai_insight: row.get(6)?,
        tags,
    })
}

/// List all entries owned by `owner_id`, newest date first with entry id
/// descending as the deterministic tie-breaker.
pub async fn list_entries(
    db: &Database,
    owner_id: &str,
) -> Result<Vec<JournalEntry>, JournalError> {
    let owner_id = owner_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM entries
                 WHERE user_id = ?1 ORDER BY date DESC, id DESC"
            ))?;
            let rows = stmt.query_map(params![owner_id], row_to_entry)?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(map_tr_err)
}

/// Insert the entry, or replace the full record when its id already
/// exists under the same owner.
///
/// The conflict clause is guarded by `user_id`, so an id collision with
/// a row owned by a different account writes nothing and surfaces as a
/// storage error instead of a cross-owner overwrite.
pub async fn upsert_entry(db: &Database, entry: &JournalEntry) -> Result<(), JournalError> {
    let entry_id = entry.id.clone();
    let entry = entry.clone();
    let changed = db
        .connection()
        .call(move |conn| {
            let now = chrono::Utc::now().to_rfc3339();
            let tags = serde_json::to_string(&entry.tags)
                .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;
            let n = conn.execute(
                "INSERT INTO entries
                     (id, user_id, title, content, date, mood, ai_insight, tags,
                      created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                     title = excluded.title,
                     content = excluded.content,
                     date = excluded.date,
                     mood = excluded.mood,
                     ai_insight = excluded.ai_insight,
                     tags = excluded.tags,
                     updated_at = excluded.updated_at
                 WHERE entries.user_id = excluded.user_id",
                params![
                    entry.id,
                    entry.owner_id,
                    entry.title,
                    entry.content,
                    entry.date.to_string(),
                    entry.mood,
                    entry.ai_insight,
                    tags,
                    now,
                ],
            )?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;

    if changed == 0 {
        return Err(JournalError::storage(format!(
            "entry `{entry_id}` exists under a different account"
        )));
    }
    Ok(())
}

/// Delete the entry owned by `owner_id` with id `entry_id`.
///
/// Idempotent: deleting an id that is already gone (or was never there)
/// succeeds without distinguishing the two cases.
pub async fn delete_entry(
    db: &Database,
    owner_id: &str,
    entry_id: &str,
) -> Result<(), JournalError> {
    let owner_id = owner_id.to_string();
    let entry_id = entry_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "DELETE FROM entries WHERE id = ?1 AND user_id = ?2",
                params![entry_id, owner_id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}
