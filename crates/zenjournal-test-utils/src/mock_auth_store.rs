// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock account and session store for deterministic testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use zenjournal_core::types::{SessionRecord, UserRecord};
use zenjournal_core::{AuthStore, JournalError};

/// An in-memory auth store.
///
/// Mirrors the real store's constraints: duplicate emails are rejected
/// and session deletion is idempotent.
pub struct MockAuthStore {
    users: Arc<Mutex<Vec<UserRecord>>>,
    sessions: Arc<Mutex<Vec<SessionRecord>>>,
}

impl MockAuthStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            sessions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of open sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

impl Default for MockAuthStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthStore for MockAuthStore {
    async fn create_user(&self, user: &UserRecord) -> Result<(), JournalError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(JournalError::storage(format!(
                "UNIQUE constraint failed: users.email ({})",
                user.email
            )));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, JournalError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_session(&self, session: &SessionRecord) -> Result<(), JournalError> {
        self.sessions.lock().await.push(session.clone());
        Ok(())
    }

    async fn find_session(
        &self,
        token: &str,
    ) -> Result<Option<(SessionRecord, UserRecord)>, JournalError> {
        let sessions = self.sessions.lock().await;
        let Some(session) = sessions.iter().find(|s| s.token == token).cloned() else {
            return Ok(None);
        };
        let user = self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.id == session.user_id)
            .cloned();
        Ok(user.map(|u| (session, u)))
    }

    async fn delete_session(&self, token: &str) -> Result<(), JournalError> {
        self.sessions.lock().await.retain(|s| s.token != token);
        Ok(())
    }
}
