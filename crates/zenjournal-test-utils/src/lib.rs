// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for ZenJournal integration tests.
//!
//! Provides in-memory mock stores and a mock analyzer for fast,
//! deterministic, CI-runnable tests without SQLite files or external
//! services.
//!
//! # Components
//!
//! - [`MockEntryStore`] - In-memory entry store with call counters and
//!   failure injection
//! - [`MockAuthStore`] - In-memory account and session store
//! - [`MockAnalyzer`] - Analysis provider with pre-configured results

pub mod mock_analyzer;
pub mod mock_auth_store;
pub mod mock_entry_store;

pub use mock_analyzer::MockAnalyzer;
pub use mock_auth_store::MockAuthStore;
pub use mock_entry_store::MockEntryStore;
