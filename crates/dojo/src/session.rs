//! Authenticated session state and its persistence.
//!
//! [`SessionStore`] is the only place that mutates the identity and credential.
//! Every mutation writes through to durable storage and to the shared
//! [`ApiHeaders`], so the request side never needs to know about sessions.

use crate::api::ApiHeaders;
use crate::data::{Credential, Identity};
use crate::storage::{KeyValueStore, keys};

/// Identity and credential, which only ever exist together.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedSession {
    pub identity: Identity,
    pub credential: Credential,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Persisted session not read yet. Routing waits on this.
    #[default]
    Restoring,
    Anonymous,
    Authenticated(AuthenticatedSession),
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        !matches!(self, SessionState::Restoring)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(session) => Some(&session.identity),
            _ => None,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        match self {
            SessionState::Authenticated(session) => Some(&session.credential),
            _ => None,
        }
    }
}

pub struct SessionStore<S> {
    storage: S,
    headers: ApiHeaders,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, headers: ApiHeaders) -> Self {
        Self { storage, headers }
    }

    pub fn headers(&self) -> &ApiHeaders {
        &self.headers
    }

    /// Reads the persisted session, re-arming the credential header if one is found.
    ///
    /// There is no round-trip to the backend: a revoked token only shows up as a
    /// failed request later on.
    pub fn restore(&self) -> SessionState {
        let Some(credential) = self.storage.get::<Credential>(keys::TOKEN) else {
            tracing::debug!("No stored credential, starting anonymous");
            return SessionState::Anonymous;
        };

        let Some(identity) = self.storage.get::<Identity>(keys::USER) else {
            tracing::warn!("Stored session is incomplete, discarding it");
            self.storage.delete(keys::TOKEN);
            self.storage.delete(keys::USER);
            self.headers.clear_credential();
            return SessionState::Anonymous;
        };

        self.headers.set_credential(&credential);
        tracing::info!(username = %identity.username, "Restored session");

        SessionState::Authenticated(AuthenticatedSession {
            identity,
            credential,
        })
    }

    /// Replaces the session wholesale. The values are trusted as given.
    ///
    /// The header is armed even when persisting fails, so the session works for
    /// the lifetime of the page and just won't survive a reload.
    pub fn login(&self, identity: Identity, credential: Credential) -> SessionState {
        self.headers.set_credential(&credential);

        if let Err(err) = self
            .storage
            .set(keys::TOKEN, &credential)
            .and_then(|_| self.storage.set(keys::USER, &identity))
        {
            tracing::error!(%err, "Failed to persist session");
        }

        tracing::info!(username = %identity.username, "Logged in");

        SessionState::Authenticated(AuthenticatedSession {
            identity,
            credential,
        })
    }

    pub fn logout(&self) -> SessionState {
        self.storage.delete(keys::TOKEN);
        self.storage.delete(keys::USER);
        self.headers.clear_credential();

        tracing::info!("Logged out");

        SessionState::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn identity() -> Identity {
        Identity {
            id: Some("u-1".to_string()),
            username: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            points: 120,
            streak_days: 4,
        }
    }

    #[test]
    fn starts_restoring() {
        let state = SessionState::default();
        assert!(!state.is_ready());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_arms_header_and_persists() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone(), ApiHeaders::new());

        let state = store.login(identity(), Credential::new("tok-1"));

        assert_eq!(state.identity(), Some(&identity()));
        assert_eq!(store.headers().authorization().as_deref(), Some("Bearer tok-1"));
        assert!(storage.contains(keys::TOKEN));
        assert!(storage.contains(keys::USER));
    }

    #[test]
    fn login_replaces_previous_session() {
        let store = SessionStore::new(MemoryStore::new(), ApiHeaders::new());
        store.login(identity(), Credential::new("tok-1"));

        let mut other = identity();
        other.username = "grace".to_string();
        let state = store.login(other.clone(), Credential::new("tok-2"));

        assert_eq!(state.identity(), Some(&other));
        assert_eq!(store.headers().authorization().as_deref(), Some("Bearer tok-2"));
    }

    #[test]
    fn logout_leaves_nothing_behind() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone(), ApiHeaders::new());
        store.login(identity(), Credential::new("tok-1"));

        let state = store.logout();

        assert_eq!(state, SessionState::Anonymous);
        assert!(state.identity().is_none());
        assert!(state.credential().is_none());
        assert!(store.headers().authorization().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_keeps_unrelated_keys() {
        let storage = MemoryStore::new();
        storage.set(keys::DARK_MODE, &true).unwrap();
        let store = SessionStore::new(storage.clone(), ApiHeaders::new());
        store.login(identity(), Credential::new("tok-1"));

        store.logout();

        assert_eq!(storage.get::<bool>(keys::DARK_MODE), Some(true));
    }

    #[test]
    fn restore_matches_fresh_login() {
        let storage = MemoryStore::new();
        let logged_in =
            SessionStore::new(storage.clone(), ApiHeaders::new()).login(identity(), Credential::new("tok-1"));

        // New headers and store over the same storage: a page reload.
        let headers = ApiHeaders::new();
        let restored = SessionStore::new(storage, headers.clone()).restore();

        assert_eq!(restored, logged_in);
        assert!(restored.is_ready());
        assert_eq!(headers.authorization().as_deref(), Some("Bearer tok-1"));
    }

    #[test]
    fn restore_without_anything_stored_is_anonymous() {
        let headers = ApiHeaders::new();
        let state = SessionStore::new(MemoryStore::new(), headers.clone()).restore();

        assert_eq!(state, SessionState::Anonymous);
        assert!(state.is_ready());
        assert!(headers.authorization().is_none());
    }

    #[test]
    fn restore_discards_credential_without_identity() {
        let storage = MemoryStore::new();
        storage.set(keys::TOKEN, &Credential::new("orphan")).unwrap();
        let headers = ApiHeaders::new();

        let state = SessionStore::new(storage.clone(), headers.clone()).restore();

        assert_eq!(state, SessionState::Anonymous);
        assert!(headers.authorization().is_none());
        assert!(!storage.contains(keys::TOKEN));
    }

    #[test]
    fn restore_discards_corrupt_identity() {
        let storage = MemoryStore::new();
        storage.set(keys::TOKEN, &Credential::new("tok-1")).unwrap();
        storage.set_raw(keys::USER, "{broken".to_string()).unwrap();

        let state = SessionStore::new(storage.clone(), ApiHeaders::new()).restore();

        assert_eq!(state, SessionState::Anonymous);
        assert!(!storage.contains(keys::TOKEN));
        assert!(!storage.contains(keys::USER));
    }
}
