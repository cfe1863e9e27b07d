// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session token CRUD operations.

use rusqlite::params;
use zenjournal_core::JournalError;
use zenjournal_core::types::{SessionRecord, UserRecord};

use crate::database::{Database, map_tr_err};

/// Open a new session.
pub async fn insert_session(db: &Database, session: &SessionRecord) -> Result<(), JournalError> {
    let session = session.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO sessions (token, user_id, created_at, expires_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    session.token,
                    session.user_id,
                    session.created_at,
                    session.expires_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Resolve a token to its session row and owning account.
pub async fn find_session(
    db: &Database,
    token: &str,
) -> Result<Option<(SessionRecord, UserRecord)>, JournalError> {
    let token = token.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT s.token, s.user_id, s.created_at, s.expires_at,
                        u.id, u.email, u.display_name, u.password_hash, u.created_at
                 FROM sessions s
                 JOIN users u ON u.id = s.user_id
                 WHERE s.token = ?1",
            )?;
            let result = stmt.query_row(params![token], |row| {
                let session = SessionRecord {
                    token: row.get(0)?,
                    user_id: row.get(1)?,
                    created_at: row.get(2)?,
                    expires_at: row.get(3)?,
                };
                let user = UserRecord {
                    id: row.get(4)?,
                    email: row.get(5)?,
                    display_name: row.get(6)?,
                    password_hash: row.get(7)?,
                    created_at: row.get(8)?,
                };
                Ok((session, user))
            });
            match result {
                Ok(pair) => Ok(Some(pair)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a session. Idempotent.
pub async fn delete_session(db: &Database, token: &str) -> Result<(), JournalError> {
    let token = token.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Drop sessions whose expiry lies before `now` (RFC 3339).
pub async fn delete_expired_sessions(db: &Database, now: &str) -> Result<(), JournalError> {
    let now = now.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM sessions WHERE expires_at < ?1", params![now])?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}
