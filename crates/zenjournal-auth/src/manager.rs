// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session manager: sign-up, sign-in, sign-out, and token resolution.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

use zenjournal_config::model::AuthConfig;
use zenjournal_core::types::{Identity, SessionEvent, SessionRecord, UserRecord};
use zenjournal_core::{AuthStore, JournalError};

use crate::password;

/// Capacity of the session event channel. Slow subscribers lag rather
/// than block sign-in.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Manages accounts and bearer-token sessions over an [`AuthStore`].
///
/// All credential failures surface as the same generic
/// [`JournalError::Auth`] message so responses do not reveal whether an
/// email is registered. Session changes are broadcast as
/// [`SessionEvent`]s; interested parties call [`subscribe`].
///
/// [`subscribe`]: SessionManager::subscribe
pub struct SessionManager {
    store: Arc<dyn AuthStore>,
    config: AuthConfig,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn AuthStore>, config: AuthConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            config,
            events,
        }
    }

    /// Subscribes to session lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Creates an account and opens a session for it.
    ///
    /// Returns the new identity and its bearer token.
    pub async fn sign_up(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<(Identity, String), JournalError> {
        let email = normalize_email(email)?;
        if password.len() < self.config.min_password_len {
            return Err(JournalError::Validation(format!(
                "password must be at least {} characters",
                self.config.min_password_len
            )));
        }
        let display_name = display_name.trim();
        let display_name = if display_name.is_empty() {
            // Fall back to the mailbox name.
            email.split('@').next().unwrap_or_default().to_string()
        } else {
            display_name.to_string()
        };

        if self.store.find_user_by_email(&email).await?.is_some() {
            return Err(JournalError::Auth(
                "an account with this email already exists".to_string(),
            ));
        }

        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            email,
            display_name,
            password_hash: password::hash_password(password)?,
            created_at: Utc::now().to_rfc3339(),
        };
        self.store.create_user(&user).await?;
        debug!(user_id = %user.id, "account created");

        let identity = user.identity();
        let token = self.open_session(&identity).await?;
        Ok((identity, token))
    }

    /// Verifies credentials and opens a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(Identity, String), JournalError> {
        let email = normalize_email(email)?;
        let Some(user) = self.store.find_user_by_email(&email).await? else {
            return Err(invalid_credentials());
        };
        if !password::verify_password(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        let identity = user.identity();
        let token = self.open_session(&identity).await?;
        Ok((identity, token))
    }

    /// Closes the session behind `token`. Unknown tokens are a no-op.
    pub async fn sign_out(&self, token: &str) -> Result<(), JournalError> {
        let resolved = self.store.find_session(token).await?;
        self.store.delete_session(token).await?;
        if let Some((session, _)) = resolved {
            debug!(user_id = %session.user_id, "signed out");
            let _ = self.events.send(SessionEvent::SignedOut {
                user_id: session.user_id,
            });
        }
        Ok(())
    }

    /// Resolves a bearer token to the identity behind it.
    ///
    /// Expired sessions resolve to `None` and are deleted on sight.
    pub async fn current_identity(&self, token: &str) -> Result<Option<Identity>, JournalError> {
        let Some((session, user)) = self.store.find_session(token).await? else {
            return Ok(None);
        };

        let expires_at = DateTime::parse_from_rfc3339(&session.expires_at)
            .map_err(|e| JournalError::Internal(format!("malformed session expiry: {e}")))?;
        if expires_at <= Utc::now() {
            warn!(user_id = %session.user_id, "expired session presented");
            self.store.delete_session(token).await?;
            return Ok(None);
        }

        Ok(Some(user.identity()))
    }

    async fn open_session(&self, identity: &Identity) -> Result<String, JournalError> {
        let now = Utc::now();
        let session = SessionRecord {
            token: Uuid::new_v4().to_string(),
            user_id: identity.id.clone(),
            created_at: now.to_rfc3339(),
            expires_at: (now + Duration::hours(self.config.session_ttl_hours)).to_rfc3339(),
        };
        self.store.insert_session(&session).await?;
        debug!(user_id = %identity.id, "session opened");
        let _ = self.events.send(SessionEvent::SignedIn(identity.clone()));
        Ok(session.token)
    }
}

fn normalize_email(email: &str) -> Result<String, JournalError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(JournalError::Validation(
            "please enter a valid email address".to_string(),
        ));
    }
    Ok(email)
}

fn invalid_credentials() -> JournalError {
    JournalError::Auth("invalid email or password".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenjournal_test_utils::MockAuthStore;

    fn manager() -> SessionManager {
        SessionManager::new(Arc::new(MockAuthStore::new()), AuthConfig::default())
    }

    #[tokio::test]
    async fn sign_up_then_resolve_token() {
        let manager = manager();
        let (identity, token) = manager
            .sign_up("Ada@Example.com", "Ada", "a strong password")
            .await
            .unwrap();
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(identity.display_name, "Ada");

        let resolved = manager.current_identity(&token).await.unwrap();
        assert_eq!(resolved, Some(identity));
    }

    #[tokio::test]
    async fn sign_up_rejects_short_password() {
        let manager = manager();
        let result = manager.sign_up("ada@example.com", "Ada", "short").await;
        assert!(matches!(result, Err(JournalError::Validation(_))));
    }

    #[tokio::test]
    async fn sign_up_rejects_invalid_email() {
        let manager = manager();
        let result = manager.sign_up("not-an-email", "Ada", "a strong password").await;
        assert!(matches!(result, Err(JournalError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_sign_up_is_an_auth_error() {
        let manager = manager();
        manager
            .sign_up("ada@example.com", "Ada", "a strong password")
            .await
            .unwrap();
        let result = manager
            .sign_up("ada@example.com", "Ada2", "another password")
            .await;
        assert!(matches!(result, Err(JournalError::Auth(_))));
    }

    #[tokio::test]
    async fn empty_display_name_falls_back_to_mailbox() {
        let manager = manager();
        let (identity, _) = manager
            .sign_up("ada@example.com", "   ", "a strong password")
            .await
            .unwrap();
        assert_eq!(identity.display_name, "ada");
    }

    #[tokio::test]
    async fn sign_in_verifies_password() {
        let manager = manager();
        manager
            .sign_up("ada@example.com", "Ada", "a strong password")
            .await
            .unwrap();

        let (identity, _) = manager
            .sign_in("ada@example.com", "a strong password")
            .await
            .unwrap();
        assert_eq!(identity.email, "ada@example.com");

        let wrong = manager.sign_in("ada@example.com", "wrong password").await;
        assert!(matches!(wrong, Err(JournalError::Auth(_))));
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_look_identical() {
        let manager = manager();
        manager
            .sign_up("ada@example.com", "Ada", "a strong password")
            .await
            .unwrap();

        let unknown = manager
            .sign_in("ghost@example.com", "a strong password")
            .await
            .unwrap_err();
        let wrong = manager
            .sign_in("ada@example.com", "wrong password")
            .await
            .unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn sign_out_invalidates_token_and_is_idempotent() {
        let manager = manager();
        let (_, token) = manager
            .sign_up("ada@example.com", "Ada", "a strong password")
            .await
            .unwrap();

        manager.sign_out(&token).await.unwrap();
        assert!(manager.current_identity(&token).await.unwrap().is_none());
        manager.sign_out(&token).await.unwrap();
    }

    #[tokio::test]
    async fn expired_session_resolves_to_none() {
        let store = Arc::new(MockAuthStore::new());
        let manager = SessionManager::new(
            store.clone(),
            AuthConfig {
                session_ttl_hours: 0,
                ..AuthConfig::default()
            },
        );
        let (_, token) = manager
            .sign_up("ada@example.com", "Ada", "a strong password")
            .await
            .unwrap();

        assert!(manager.current_identity(&token).await.unwrap().is_none());
        // The expired row is removed on first sight.
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn session_events_are_broadcast() {
        let manager = manager();
        let mut events = manager.subscribe();

        let (identity, token) = manager
            .sign_up("ada@example.com", "Ada", "a strong password")
            .await
            .unwrap();
        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::SignedIn(identity.clone())
        );

        manager.sign_out(&token).await.unwrap();
        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::SignedOut {
                user_id: identity.id
            }
        );
    }

    #[tokio::test]
    async fn unrelated_token_resolves_to_none() {
        let manager = manager();
        assert!(manager.current_identity("bogus").await.unwrap().is_none());
    }
}
