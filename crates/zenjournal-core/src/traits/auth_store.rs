// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account and session persistence trait backing the session manager.

use async_trait::async_trait;

use crate::error::JournalError;
use crate::types::{SessionRecord, UserRecord};

/// Persistence contract for user accounts and bearer-token sessions.
#[async_trait]
pub trait AuthStore: Send + Sync + 'static {
    /// Creates a new account. A duplicate email is a storage error.
    async fn create_user(&self, user: &UserRecord) -> Result<(), JournalError>;

    /// Looks up an account by email (exact match).
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, JournalError>;

    /// Opens a new session.
    async fn insert_session(&self, session: &SessionRecord) -> Result<(), JournalError>;

    /// Resolves a session token to its session row and account, or
    /// `None` for unknown tokens.
    async fn find_session(
        &self,
        token: &str,
    ) -> Result<Option<(SessionRecord, UserRecord)>, JournalError>;

    /// Deletes a session. Idempotent.
    async fn delete_session(&self, token: &str) -> Result<(), JournalError>;
}
