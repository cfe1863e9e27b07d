// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the ZenJournal service.

use thiserror::Error;

/// The primary error type used across all ZenJournal adapter traits and
/// core operations.
///
/// The taxonomy is deliberately small: validation failures are blocked
/// before any external call, storage failures surface to the caller with
/// state unchanged, and analysis failures are absorbed into a fallback
/// payload before they ever reach this type.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A user-visible precondition failure (empty content on save,
    /// too-short text on analyze, unconfirmed delete).
    #[error("{0}")]
    Validation(String),

    /// Storage backend errors (database connection, query failure,
    /// ownership conflict).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Analysis provider errors (API failure, schema mismatch). These are
    /// internal to the analysis client and never surface to users.
    #[error("analysis error: {message}")]
    Analysis {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication errors (unknown user, bad credentials, expired or
    /// missing session).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl JournalError {
    /// Shorthand for a storage error wrapping an arbitrary source.
    pub fn storage<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        JournalError::Storage {
            source: source.into(),
        }
    }
}
