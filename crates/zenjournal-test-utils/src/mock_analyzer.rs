// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock analysis provider for deterministic testing.
//!
//! `MockAnalyzer` implements `AnalysisProvider` with pre-configured
//! results, enabling controller tests without the Gemini API.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use zenjournal_core::AnalysisProvider;
use zenjournal_core::types::EntryAnalysis;

/// A mock analyzer that returns pre-configured analyses.
///
/// Results are popped from a FIFO queue. When the queue is empty a
/// fixed default analysis is returned. Analyzed texts are captured for
/// assertion.
pub struct MockAnalyzer {
    results: Arc<Mutex<VecDeque<EntryAnalysis>>>,
    analyzed_texts: Arc<Mutex<Vec<String>>>,
    calls: AtomicUsize,
}

impl MockAnalyzer {
    /// Create a new mock analyzer with an empty result queue.
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            analyzed_texts: Arc::new(Mutex::new(Vec::new())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock analyzer pre-loaded with the given results.
    pub fn with_results(results: Vec<EntryAnalysis>) -> Self {
        let analyzer = Self::new();
        *analyzer.results.try_lock().unwrap() = VecDeque::from(results);
        analyzer
    }

    /// Number of `analyze` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All texts passed to `analyze`, in call order.
    pub async fn analyzed_texts(&self) -> Vec<String> {
        self.analyzed_texts.lock().await.clone()
    }

    fn default_analysis() -> EntryAnalysis {
        EntryAnalysis {
            mood: "Calm".to_string(),
            insight: "A mock insight.".to_string(),
            tags: vec!["Mock".to_string()],
        }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalyzer {
    async fn analyze(&self, text: &str) -> EntryAnalysis {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.analyzed_texts.lock().await.push(text.to_string());
        self.results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(Self::default_analysis)
    }
}
