// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the ZenJournal service.
//!
//! This crate provides the foundational trait definitions, error types,
//! and domain types used throughout the ZenJournal workspace. The
//! storage, analysis, and auth crates implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::JournalError;
pub use types::{
    EntryAnalysis, EntryDraft, Identity, JournalEntry, Mood, SessionEvent, SessionRecord,
    UserRecord,
};

// Re-export all adapter traits at crate root.
pub use traits::{AnalysisProvider, AuthStore, EntryStore};
