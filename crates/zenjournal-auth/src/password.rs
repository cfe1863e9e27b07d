// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argon2id password hashing.
//!
//! Uses the PHC string format so parameters and salt travel with the
//! hash; verification reads them back from the stored string.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use zenjournal_core::JournalError;

/// Hashes a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, JournalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| JournalError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash string.
///
/// Returns `false` for a mismatch; a malformed stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, JournalError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| JournalError::Internal(format!("malformed stored password hash: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(JournalError::Internal(format!(
            "password verification failed: {e}"
        ))),
    }
}
