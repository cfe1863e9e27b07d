// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Analysis provider trait for text-to-structured-mood inference.

use async_trait::async_trait;

use crate::types::EntryAnalysis;

/// Contract for the AI analysis capability.
///
/// `analyze` is deliberately infallible: for text trimmed shorter than
/// the provider's minimum it returns a fixed neutral placeholder without
/// any network call, and on any transport or parse failure it returns a
/// fixed fallback payload. An analysis failure must never block saving
/// an entry, so errors are absorbed here rather than propagated.
#[async_trait]
pub trait AnalysisProvider: Send + Sync + 'static {
    /// Analyzes entry text into a mood, an insight sentence, and a small
    /// set of theme tags.
    async fn analyze(&self, text: &str) -> EntryAnalysis;
}
