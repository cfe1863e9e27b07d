// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Journal entry lifecycle for ZenJournal.
//!
//! Exposes [`EntryController`], the single entry point for listing,
//! loading, analyzing, saving, and deleting entries on behalf of a
//! signed-in identity.

pub mod controller;

pub use controller::EntryController;
