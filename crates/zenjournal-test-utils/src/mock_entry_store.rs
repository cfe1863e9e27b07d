// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock entry store for deterministic testing.
//!
//! `MockEntryStore` implements `EntryStore` over an in-memory vector,
//! with per-operation call counters and failure injection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use zenjournal_core::types::JournalEntry;
use zenjournal_core::{EntryStore, JournalError};

/// An in-memory entry store.
///
/// Listing honors the real store's ordering contract (date descending,
/// then id descending) so controller tests observe realistic output.
/// When failure injection is armed every operation returns a storage
/// error without touching the data.
pub struct MockEntryStore {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
    upsert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockEntryStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            failing: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
            upsert_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock store pre-loaded with the given entries.
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        let store = Self::new();
        *store.entries.try_lock().unwrap() = entries;
        store
    }

    /// Arm or disarm failure injection for all subsequent operations.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `list_entries` calls so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of `upsert_entry` calls so far.
    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    /// Number of `delete_entry` calls so far.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Snapshot of all stored entries, unordered.
    pub async fn snapshot(&self) -> Vec<JournalEntry> {
        self.entries.lock().await.clone()
    }

    fn check_failure(&self) -> Result<(), JournalError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(JournalError::storage("injected mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for MockEntryStore {
    async fn list_entries(&self, owner_id: &str) -> Result<Vec<JournalEntry>, JournalError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let mut entries: Vec<JournalEntry> = self
            .entries
            .lock()
            .await
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn upsert_entry(&self, entry: &JournalEntry) -> Result<(), JournalError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let mut entries = self.entries.lock().await;
        if let Some(existing) = entries.iter_mut().find(|e| e.id == entry.id) {
            if existing.owner_id != entry.owner_id {
                return Err(JournalError::storage(format!(
                    "entry `{}` exists under a different account",
                    entry.id
                )));
            }
            *existing = entry.clone();
        } else {
            entries.push(entry.clone());
        }
        Ok(())
    }

    async fn delete_entry(&self, owner_id: &str, entry_id: &str) -> Result<(), JournalError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.entries
            .lock()
            .await
            .retain(|e| !(e.id == entry_id && e.owner_id == owner_id));
        Ok(())
    }
}
