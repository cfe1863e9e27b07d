// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accounts and sessions for ZenJournal.
//!
//! [`SessionManager`] owns the full credential lifecycle: Argon2id
//! password hashing, bearer-token sessions with expiry, and a broadcast
//! channel of [`zenjournal_core::types::SessionEvent`]s.

pub mod manager;
pub mod password;

pub use manager::SessionManager;
