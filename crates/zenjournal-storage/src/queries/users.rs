// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User account CRUD operations.

use rusqlite::params;
use zenjournal_core::JournalError;
use zenjournal_core::types::UserRecord;

use crate::database::{Database, map_tr_err};

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserRecord> {
    Ok(UserRecord {
        id: row.get(0)?,
        email: row.get(1)?,
        display_name: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Create a new account. The unique index on `email` rejects duplicates.
pub async fn create_user(db: &Database, user: &UserRecord) -> Result<(), JournalError> {
    let user = user.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO users (id, email, display_name, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user.id,
                    user.email,
                    user.display_name,
                    user.password_hash,
                    user.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Look up an account by exact email match.
pub async fn find_user_by_email(
    db: &Database,
    email: &str,
) -> Result<Option<UserRecord>, JournalError> {
    let email = email.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, email, display_name, password_hash, created_at
                 FROM users WHERE email = ?1",
            )?;
            let result = stmt.query_row(params![email], row_to_user);
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}
