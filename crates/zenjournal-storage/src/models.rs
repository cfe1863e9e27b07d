// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `zenjournal-core::types` for use
//! across adapter trait boundaries. This module re-exports them for
//! convenience within the storage crate.

pub use zenjournal_core::types::{JournalEntry, SessionRecord, UserRecord};
