// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the EntryStore and AuthStore traits.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use zenjournal_config::model::StorageConfig;
use zenjournal_core::types::{JournalEntry, SessionRecord, UserRecord};
use zenjournal_core::{AuthStore, EntryStore, JournalError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily opened on the first call
/// to [`SqliteStore::initialize`].
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is
    /// called.
    ///
    /// [`initialize`]: SqliteStore::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Opens the database at the configured path and runs migrations.
    pub async fn initialize(&self) -> Result<(), JournalError> {
        let db = Database::open_with_wal(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| {
            JournalError::storage("storage already initialized".to_string())
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    /// Drops every session whose expiry has passed.
    ///
    /// The session manager already discards expired tokens as it sees
    /// them; this bulk purge keeps abandoned sessions from accumulating
    /// and is meant to run on a timer.
    pub async fn purge_expired_sessions(&self) -> Result<(), JournalError> {
        let now = chrono::Utc::now().to_rfc3339();
        queries::sessions::delete_expired_sessions(self.db()?, &now).await
    }

    /// Checkpoints the WAL so all committed data reaches the main file.
    pub async fn close(&self) -> Result<(), JournalError> {
        if let Some(db) = self.db.get() {
            db.close().await?;
        }
        Ok(())
    }

    fn db(&self) -> Result<&Database, JournalError> {
        self.db.get().ok_or_else(|| {
            JournalError::storage("storage not initialized -- call initialize() first".to_string())
        })
    }
}

#[async_trait]
impl EntryStore for SqliteStore {
    async fn list_entries(&self, owner_id: &str) -> Result<Vec<JournalEntry>, JournalError> {
        queries::entries::list_entries(self.db()?, owner_id).await
    }

    async fn upsert_entry(&self, entry: &JournalEntry) -> Result<(), JournalError> {
        queries::entries::upsert_entry(self.db()?, entry).await
    }

    async fn delete_entry(&self, owner_id: &str, entry_id: &str) -> Result<(), JournalError> {
        queries::entries::delete_entry(self.db()?, owner_id, entry_id).await
    }
}

#[async_trait]
impl AuthStore for SqliteStore {
    async fn create_user(&self, user: &UserRecord) -> Result<(), JournalError> {
        queries::users::create_user(self.db()?, user).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, JournalError> {
        queries::users::find_user_by_email(self.db()?, email).await
    }

    async fn insert_session(&self, session: &SessionRecord) -> Result<(), JournalError> {
        queries::sessions::insert_session(self.db()?, session).await
    }

    async fn find_session(
        &self,
        token: &str,
    ) -> Result<Option<(SessionRecord, UserRecord)>, JournalError> {
        queries::sessions::find_session(self.db()?, token).await
    }

    async fn delete_session(&self, token: &str) -> Result<(), JournalError> {
        queries::sessions::delete_session(self.db()?, token).await
    }
}
