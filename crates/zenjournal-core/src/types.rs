// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the ZenJournal workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A signed-in user as seen by the rest of the application.
///
/// Created by the session manager at sign-up/sign-in and immutable from
/// the application's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

/// A persisted journal entry.
///
/// `id` is immutable once created and `owner_id` is stamped exactly once
/// at save time. `mood` and `ai_insight` stay absent until the user
/// explicitly requests analysis; `tags` is replaced wholesale on each
/// analysis, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    /// Calendar date (no time component); default descending sort key.
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub ai_insight: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// In-memory editing state for an entry.
///
/// `id` is `None` for brand-new drafts and assigned only at save time.
/// A missing `date` defaults to the current date when the draft is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub ai_insight: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EntryDraft {
    /// A just-constructed draft: empty title/content, today's date,
    /// empty tags, no id.
    pub fn new() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            date: Some(chrono::Local::now().date_naive()),
            mood: None,
            ai_insight: None,
            tags: Vec::new(),
        }
    }

    /// Builds a draft pre-filled from an existing entry for editing.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            title: entry.title.clone(),
            content: entry.content.clone(),
            date: Some(entry.date),
            mood: entry.mood.clone(),
            ai_insight: entry.ai_insight.clone(),
            tags: entry.tags.clone(),
        }
    }
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed three-field result of an AI analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAnalysis {
    pub mood: String,
    pub insight: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Well-known mood labels.
///
/// The analysis provider may return any free-form one-word mood; this
/// enum covers the set the application itself produces, most notably the
/// neutral [`Mood::Reflective`] placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Anxious,
    Energized,
    Reflective,
}

/// A stored user account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl UserRecord {
    /// The identity this account resolves to.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// A stored session row. Sessions are bearer tokens with an expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 expiry timestamp; sessions past this instant resolve to
    /// no identity.
    pub expires_at: String,
}

/// Emitted by the session manager whenever the underlying session
/// changes. The single subscription point for identity updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Identity),
    SignedOut { user_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_draft_has_defaults() {
        let draft = EntryDraft::new();
        assert!(draft.id.is_none());
        assert!(draft.title.is_empty());
        assert!(draft.content.is_empty());
        assert_eq!(draft.date, Some(chrono::Local::now().date_naive()));
        assert!(draft.tags.is_empty());
        assert!(draft.mood.is_none());
        assert!(draft.ai_insight.is_none());
    }

    #[test]
    fn draft_from_entry_round_trips_fields() {
        let entry = JournalEntry {
            id: "e1".into(),
            owner_id: "u1".into(),
            title: "Morning pages".into(),
            content: "Slept well, feeling rested.".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            mood: Some("Calm".into()),
            ai_insight: Some("Rest compounds.".into()),
            tags: vec!["Health".into()],
        };
        let draft = EntryDraft::from_entry(&entry);
        assert_eq!(draft.id.as_deref(), Some("e1"));
        assert_eq!(draft.title, entry.title);
        assert_eq!(draft.date, Some(entry.date));
        assert_eq!(draft.tags, entry.tags);
    }

    #[test]
    fn mood_display_and_parse_round_trip() {
        for mood in [
            Mood::Happy,
            Mood::Calm,
            Mood::Sad,
            Mood::Anxious,
            Mood::Energized,
            Mood::Reflective,
        ] {
            let s = mood.to_string();
            assert_eq!(Mood::from_str(&s).unwrap(), mood);
        }
    }

    #[test]
    fn entry_serializes_date_as_plain_calendar_date() {
        let entry = JournalEntry {
            id: "e1".into(),
            owner_id: "u1".into(),
            title: "T".into(),
            content: "C".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            mood: None,
            ai_insight: None,
            tags: vec![],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2024-05-01\""));
    }

    #[test]
    fn user_record_resolves_identity() {
        let user = UserRecord {
            id: "u1".into(),
            email: "a@example.com".into(),
            display_name: "Ada".into(),
            password_hash: "$argon2id$...".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
        };
        let identity = user.identity();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.display_name, "Ada");
    }
}
