//! The session store: at most one authenticated identity per process

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::auth::jwt::SessionSigner;
use crate::auth::models::{LoginRequest, Role, SessionUser, SignupFields};
use crate::auth::roster::Roster;
use crate::auth::storage::Storage;
use crate::site::nav::Viewer;

/// Storage key holding the persisted session
pub const STORAGE_KEY: &str = "shatam_user";

const EVENT_CAPACITY: usize = 16;

/// Current authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(SessionUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Published on every session transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "PascalCase")]
pub enum SessionEvent {
    Restored { user: SessionUser },
    LoggedIn { user: SessionUser },
    SignedUp { user: SessionUser },
    LoggedOut,
}

/// Owns the current session and its persisted copy
pub struct SessionStore {
    roster: Arc<Roster>,
    signer: SessionSigner,
    storage: Box<dyn Storage>,
    state: SessionState,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Create an unauthenticated store; call [`SessionStore::restore`] to
    /// adopt a persisted session
    pub fn new(roster: Arc<Roster>, signer: SessionSigner, storage: impl Storage + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            roster,
            signer,
            storage: Box::new(storage),
            state: SessionState::Unauthenticated,
            events,
        }
    }

    /// Create a store and restore whatever session was persisted
    pub fn open(roster: Arc<Roster>, signer: SessionSigner, storage: impl Storage + 'static) -> Self {
        let mut store = Self::new(roster, signer, storage);
        store.restore();
        store
    }

    /// Adopt the persisted session if there is a valid one. Absent or
    /// malformed entries leave the store unauthenticated; malformed ones are
    /// removed.
    pub fn restore(&mut self) -> &SessionState {
        let token = match self.storage.get(STORAGE_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Could not read persisted session: {}", e);
                None
            }
        };

        self.state = match token.map(|token| self.signer.verify(&token)) {
            None => SessionState::Unauthenticated,
            Some(Ok(user)) => {
                tracing::info!("Restored session for {} ({})", user.name, user.role);
                self.publish(SessionEvent::Restored { user: user.clone() });
                SessionState::Authenticated(user)
            }
            Some(Err(e)) => {
                tracing::warn!("Discarding malformed persisted session: {}", e);
                if let Err(e) = self.storage.remove(STORAGE_KEY) {
                    tracing::error!("Failed to remove persisted session: {}", e);
                }
                SessionState::Unauthenticated
            }
        };

        &self.state
    }

    /// Check credentials against the roster. On a match the session is set
    /// and persisted. A failed login leaves the state untouched.
    pub fn login(&mut self, credentials: &LoginRequest) -> bool {
        let Ok(role) = credentials.role.parse::<Role>() else {
            tracing::info!("Login rejected: unknown role '{}'", credentials.role);
            return false;
        };

        match self
            .roster
            .verify(&credentials.username, &credentials.password, role)
        {
            Some(user) => {
                tracing::info!("Logged in {} as {}", user.name, user.role);
                self.adopt(user.clone());
                self.publish(SessionEvent::LoggedIn { user });
                true
            }
            None => {
                tracing::info!("Login rejected for handle '{}'", credentials.username);
                false
            }
        }
    }

    /// Create a new identity from the given fields and make it current.
    /// There is no uniqueness check against the roster.
    pub fn signup(&mut self, fields: SignupFields) -> SessionUser {
        let user = SessionUser {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            name: fields.name,
            email: fields.email,
            role: fields.role,
            phone: fields.phone,
            location: fields.location,
            age: fields.age,
        };

        tracing::info!("Signed up {} as {}", user.name, user.role);
        self.adopt(user.clone());
        self.publish(SessionEvent::SignedUp { user: user.clone() });
        user
    }

    /// Clear the session and its persisted copy
    pub fn logout(&mut self) {
        if let Some(user) = self.state.user() {
            tracing::info!("Logged out {}", user.name);
        }
        self.state = SessionState::Unauthenticated;
        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            tracing::error!("Failed to remove persisted session: {}", e);
        }
        self.publish(SessionEvent::LoggedOut);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Who is looking at the site right now
    pub fn viewer(&self) -> Viewer {
        Viewer::from_session(self.current())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Receive every subsequent session transition
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn adopt(&mut self, user: SessionUser) {
        match self.signer.sign(&user) {
            Ok(token) => {
                if let Err(e) = self.storage.set(STORAGE_KEY, &token) {
                    tracing::error!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to sign session: {}", e),
        }
        self.state = SessionState::Authenticated(user);
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
