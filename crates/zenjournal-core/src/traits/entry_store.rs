// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry repository trait for persistence backends.

use async_trait::async_trait;

use crate::error::JournalError;
use crate::types::JournalEntry;

/// Persistence contract for journal entries.
///
/// Every operation is scoped to an owner: implementations must never
/// return or mutate rows whose `owner_id` differs from the caller's.
/// Row-level scoping is an invariant of the store, not a courtesy of
/// the caller.
#[async_trait]
pub trait EntryStore: Send + Sync + 'static {
    /// Lists all entries for `owner_id`, ordered by `date` descending
    /// with entry id descending as the deterministic tie-breaker.
    async fn list_entries(&self, owner_id: &str) -> Result<Vec<JournalEntry>, JournalError>;

    /// Inserts the entry if its `id` is unseen, otherwise replaces the
    /// full record. No partial-field patch semantics. Replacing an id
    /// owned by a different user is a storage error.
    async fn upsert_entry(&self, entry: &JournalEntry) -> Result<(), JournalError>;

    /// Deletes the entry with `entry_id` belonging to `owner_id`.
    /// Idempotent: deleting an absent id succeeds.
    async fn delete_entry(&self, owner_id: &str, entry_id: &str) -> Result<(), JournalError>;
}
