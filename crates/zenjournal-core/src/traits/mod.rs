// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the external capabilities ZenJournal
//! delegates to: entry persistence, AI analysis, and account/session
//! persistence. All traits use `#[async_trait]` for dynamic dispatch.

pub mod analysis;
pub mod auth_store;
pub mod entry_store;

pub use analysis::AnalysisProvider;
pub use auth_store::AuthStore;
pub use entry_store::EntryStore;
