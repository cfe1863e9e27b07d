// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry lifecycle orchestration.
//!
//! [`EntryController`] sits between the HTTP surface and the stores and
//! enforces the journal's rules: every operation is scoped to an
//! explicit identity, drafts are validated before they become entries,
//! and deletion commits only after an explicit confirmation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use zenjournal_core::types::{EntryDraft, Identity, JournalEntry};
use zenjournal_core::{AnalysisProvider, EntryStore, JournalError};

/// Title used when a draft is saved without one.
pub const DEFAULT_TITLE: &str = "Untitled Entry";

/// Content trimmed shorter than this cannot be analyzed.
pub const MIN_ANALYZABLE_LEN: usize = 10;

/// How many moods a summary reports.
const SUMMARY_TOP_N: usize = 3;

/// Orchestrates the journal entry lifecycle for signed-in users.
pub struct EntryController {
    store: Arc<dyn EntryStore>,
    analyzer: Arc<dyn AnalysisProvider>,
}

impl EntryController {
    pub fn new(store: Arc<dyn EntryStore>, analyzer: Arc<dyn AnalysisProvider>) -> Self {
        Self { store, analyzer }
    }

    /// Lists the user's entries, newest first.
    ///
    /// A storage failure degrades to an empty list so the journal view
    /// always renders.
    pub async fn list_entries(&self, user: &Identity) -> Vec<JournalEntry> {
        match self.store.list_entries(&user.id).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "listing entries failed");
                Vec::new()
            }
        }
    }

    /// Loads an entry into a draft for editing.
    ///
    /// A missing or unknown id yields a blank draft dated today rather
    /// than an error, so the editor always opens.
    pub async fn load_entry(&self, user: &Identity, entry_id: Option<&str>) -> EntryDraft {
        let Some(entry_id) = entry_id else {
            return EntryDraft::new();
        };
        self.list_entries(user)
            .await
            .iter()
            .find(|e| e.id == entry_id)
            .map(EntryDraft::from_entry)
            .unwrap_or_default()
    }

    /// Runs AI analysis over a draft's content and returns the draft
    /// with `mood`, `ai_insight`, and `tags` replaced wholesale.
    ///
    /// The draft itself is not persisted; a later save commits the
    /// analysis alongside the text.
    pub async fn analyze(&self, draft: &EntryDraft) -> Result<EntryDraft, JournalError> {
        if draft.content.trim().len() < MIN_ANALYZABLE_LEN {
            return Err(JournalError::Validation(
                "please write a bit more before asking for insights".to_string(),
            ));
        }
        let analysis = self.analyzer.analyze(&draft.content).await;
        let mut analyzed = draft.clone();
        analyzed.mood = Some(analysis.mood);
        analyzed.ai_insight = Some(analysis.insight);
        analyzed.tags = analysis.tags;
        Ok(analyzed)
    }

    /// Validates a draft and persists it as an entry owned by `user`.
    ///
    /// Empty content is rejected before anything touches the store. A
    /// draft without an id becomes a new entry; missing title and date
    /// fall back to [`DEFAULT_TITLE`] and today.
    pub async fn save(&self, user: &Identity, draft: EntryDraft) -> Result<JournalEntry, JournalError> {
        if draft.content.trim().is_empty() {
            return Err(JournalError::Validation(
                "Please write something in your journal.".to_string(),
            ));
        }

        let title = draft.title.trim();
        let entry = JournalEntry {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            owner_id: user.id.clone(),
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: draft.content,
            date: draft.date.unwrap_or_else(|| chrono::Local::now().date_naive()),
            mood: draft.mood,
            ai_insight: draft.ai_insight,
            tags: draft.tags,
        };

        self.store.upsert_entry(&entry).await?;
        debug!(user_id = %user.id, entry_id = %entry.id, "entry saved");
        Ok(entry)
    }

    /// Deletes an entry after explicit confirmation.
    ///
    /// The first phase (UI prompt) happens outside; an unconfirmed call
    /// never reaches the store.
    pub async fn delete(
        &self,
        user: &Identity,
        entry_id: &str,
        confirmed: bool,
    ) -> Result<(), JournalError> {
        if !confirmed {
            return Err(JournalError::Validation(
                "deletion requires confirmation".to_string(),
            ));
        }
        self.store.delete_entry(&user.id, entry_id).await?;
        debug!(user_id = %user.id, entry_id, "entry deleted");
        Ok(())
    }

    /// Counts analyzed moods across the user's entries and returns the
    /// top three as `(mood, count)`, most frequent first with ties
    /// broken alphabetically.
    pub async fn mood_summary(&self, user: &Identity) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in self.list_entries(user).await {
            if let Some(mood) = entry.mood {
                *counts.entry(mood).or_default() += 1;
            }
        }
        let mut summary: Vec<(String, usize)> = counts.into_iter().collect();
        summary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        summary.truncate(SUMMARY_TOP_N);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zenjournal_core::types::EntryAnalysis;
    use zenjournal_test_utils::{MockAnalyzer, MockEntryStore};

    fn ada() -> Identity {
        Identity {
            id: "user-1".to_string(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
        }
    }

    fn entry(id: &str, owner: &str, date: &str, mood: Option<&str>) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            owner_id: owner.to_string(),
            title: "T".to_string(),
            content: "Some journal content here.".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            mood: mood.map(String::from),
            ai_insight: None,
            tags: Vec::new(),
        }
    }

    fn controller_with(
        store: Arc<MockEntryStore>,
        analyzer: Arc<MockAnalyzer>,
    ) -> EntryController {
        EntryController::new(store, analyzer)
    }

    #[tokio::test]
    async fn save_assigns_id_title_and_date_defaults() {
        let store = Arc::new(MockEntryStore::new());
        let controller = controller_with(store.clone(), Arc::new(MockAnalyzer::new()));

        let draft = EntryDraft {
            id: None,
            title: "   ".to_string(),
            content: "Wrote a little today.".to_string(),
            date: None,
            mood: None,
            ai_insight: None,
            tags: Vec::new(),
        };
        let saved = controller.save(&ada(), draft).await.unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(saved.title, "Untitled Entry");
        assert_eq!(saved.date, chrono::Local::now().date_naive());
        assert_eq!(saved.owner_id, "user-1");
        assert_eq!(store.snapshot().await, vec![saved]);
    }

    #[tokio::test]
    async fn save_rejects_empty_content_without_touching_store() {
        let store = Arc::new(MockEntryStore::new());
        let controller = controller_with(store.clone(), Arc::new(MockAnalyzer::new()));

        let draft = EntryDraft {
            content: "   \n  ".to_string(),
            ..EntryDraft::new()
        };
        let result = controller.save(&ada(), draft).await;

        match result {
            Err(JournalError::Validation(msg)) => {
                assert_eq!(msg, "Please write something in your journal.");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.upsert_calls(), 0, "store must not be called");
    }

    #[tokio::test]
    async fn save_keeps_existing_id_for_edits() {
        let store = Arc::new(MockEntryStore::with_entries(vec![entry(
            "e1",
            "user-1",
            "2024-05-01",
            None,
        )]));
        let controller = controller_with(store.clone(), Arc::new(MockAnalyzer::new()));

        let mut draft = controller.load_entry(&ada(), Some("e1")).await;
        draft.content = "Edited content now.".to_string();
        let saved = controller.save(&ada(), draft).await.unwrap();

        assert_eq!(saved.id, "e1");
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "Edited content now.");
    }

    #[tokio::test]
    async fn load_without_id_gives_blank_draft() {
        let controller =
            controller_with(Arc::new(MockEntryStore::new()), Arc::new(MockAnalyzer::new()));
        let draft = controller.load_entry(&ada(), None).await;
        assert!(draft.id.is_none());
        assert!(draft.content.is_empty());
        assert_eq!(draft.date, Some(chrono::Local::now().date_naive()));
    }

    #[tokio::test]
    async fn load_with_unknown_id_gives_blank_draft() {
        let controller =
            controller_with(Arc::new(MockEntryStore::new()), Arc::new(MockAnalyzer::new()));
        let draft = controller.load_entry(&ada(), Some("ghost")).await;
        assert!(draft.id.is_none());
        assert!(draft.content.is_empty());
    }

    #[tokio::test]
    async fn load_never_crosses_owners() {
        let store = Arc::new(MockEntryStore::with_entries(vec![entry(
            "theirs",
            "user-2",
            "2024-05-01",
            None,
        )]));
        let controller = controller_with(store, Arc::new(MockAnalyzer::new()));

        let draft = controller.load_entry(&ada(), Some("theirs")).await;
        assert!(draft.id.is_none(), "other users' entries are invisible");
    }

    #[tokio::test]
    async fn analyze_replaces_analysis_fields_wholesale() {
        let analyzer = Arc::new(MockAnalyzer::with_results(vec![EntryAnalysis {
            mood: "Energized".to_string(),
            insight: "Momentum feeds on small wins.".to_string(),
            tags: vec!["Work".to_string(), "Focus".to_string()],
        }]));
        let controller = controller_with(Arc::new(MockEntryStore::new()), analyzer.clone());

        let draft = EntryDraft {
            content: "Shipped the feature and went for a run.".to_string(),
            mood: Some("Sad".to_string()),
            tags: vec!["Old".to_string()],
            ..EntryDraft::new()
        };
        let analyzed = controller.analyze(&draft).await.unwrap();

        assert_eq!(analyzed.mood.as_deref(), Some("Energized"));
        assert_eq!(analyzed.ai_insight.as_deref(), Some("Momentum feeds on small wins."));
        assert_eq!(analyzed.tags, vec!["Work", "Focus"]);
        assert_eq!(analyzer.calls(), 1);
    }

    #[tokio::test]
    async fn analyze_rejects_short_content_without_calling_provider() {
        let analyzer = Arc::new(MockAnalyzer::new());
        let controller = controller_with(Arc::new(MockEntryStore::new()), analyzer.clone());

        let draft = EntryDraft {
            content: "  tired  ".to_string(),
            ..EntryDraft::new()
        };
        let result = controller.analyze(&draft).await;

        assert!(matches!(result, Err(JournalError::Validation(_))));
        assert_eq!(analyzer.calls(), 0);
    }

    #[tokio::test]
    async fn analyze_does_not_persist() {
        let store = Arc::new(MockEntryStore::new());
        let controller = controller_with(store.clone(), Arc::new(MockAnalyzer::new()));

        let draft = EntryDraft {
            content: "A long enough entry to analyze.".to_string(),
            ..EntryDraft::new()
        };
        controller.analyze(&draft).await.unwrap();
        assert_eq!(store.upsert_calls(), 0);
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let store = Arc::new(MockEntryStore::with_entries(vec![entry(
            "e1",
            "user-1",
            "2024-05-01",
            None,
        )]));
        let controller = controller_with(store.clone(), Arc::new(MockAnalyzer::new()));

        let unconfirmed = controller.delete(&ada(), "e1", false).await;
        assert!(matches!(unconfirmed, Err(JournalError::Validation(_))));
        assert_eq!(store.delete_calls(), 0);

        controller.delete(&ada(), "e1", true).await.unwrap();
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn list_failure_degrades_to_empty() {
        let store = Arc::new(MockEntryStore::new());
        store.set_failing(true);
        let controller = controller_with(store, Arc::new(MockAnalyzer::new()));

        assert!(controller.list_entries(&ada()).await.is_empty());
    }

    #[tokio::test]
    async fn mood_summary_counts_top_three() {
        let store = Arc::new(MockEntryStore::with_entries(vec![
            entry("a", "user-1", "2024-05-01", Some("Calm")),
            entry("b", "user-1", "2024-05-02", Some("Calm")),
            entry("c", "user-1", "2024-05-03", Some("Happy")),
            entry("d", "user-1", "2024-05-04", Some("Anxious")),
            entry("e", "user-1", "2024-05-05", Some("Anxious")),
            entry("f", "user-1", "2024-05-06", Some("Sad")),
            entry("g", "user-1", "2024-05-07", None),
        ]));
        let controller = controller_with(store, Arc::new(MockAnalyzer::new()));

        let summary = controller.mood_summary(&ada()).await;
        assert_eq!(
            summary,
            vec![
                ("Anxious".to_string(), 2),
                ("Calm".to_string(), 2),
                ("Happy".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn mood_summary_ignores_unanalyzed_entries() {
        let store = Arc::new(MockEntryStore::with_entries(vec![entry(
            "a",
            "user-1",
            "2024-05-01",
            None,
        )]));
        let controller = controller_with(store, Arc::new(MockAnalyzer::new()));
        assert!(controller.mood_summary(&ada()).await.is_empty());
    }
}
