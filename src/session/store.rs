// src/session/store.rs
//
// Owner of the signed-in user's session.
//
// RULES:
// - The token is only ever held encoded
// - Every mutation is written through to storage before it becomes visible
// - Every mutation emits an event

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::application::SessionContext;
use crate::crypto::CredentialCodec;
use crate::error::AppResult;
use crate::events::{EventBus, SessionChanged, SessionCleared, SessionField};
use crate::session::storage::SessionStorage;

/// Storage key of the persisted session.
pub const SESSION_KEY: &str = "auth";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Codec output, never the plaintext token.
    #[serde(default, rename = "jwt")]
    pub encoded_token: String,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.encoded_token.is_empty()
    }
}

pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn SessionStorage>,
    codec: Arc<CredentialCodec>,
    event_bus: Arc<EventBus>,
}

impl SessionStore {
    /// Opens the store, rehydrating whatever session was persisted.
    ///
    /// A persisted value that no longer parses is discarded.
    pub fn open(
        storage: Arc<dyn SessionStorage>,
        codec: Arc<CredentialCodec>,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        let session = match storage.get(SESSION_KEY)? {
            None => Session::default(),
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => session,
                Err(e) => {
                    log::warn!("Discarding unreadable persisted session: {}", e);
                    storage.remove(SESSION_KEY)?;
                    Session::default()
                }
            },
        };

        Ok(Self {
            state: RwLock::new(session),
            storage,
            codec,
            event_bus,
        })
    }

    /// Current session value.
    pub fn snapshot(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Explicit context handed to every action and query call.
    pub fn context(&self) -> SessionContext {
        let session = self.snapshot();
        SessionContext::new(session.name, session.email, session.encoded_token)
    }

    pub fn set_name(&self, name: &str) -> AppResult<()> {
        self.update(&[SessionField::Name], |session| session.name = name.to_string())
    }

    pub fn set_email(&self, email: &str) -> AppResult<()> {
        self.update(&[SessionField::Email], |session| {
            session.email = email.to_string()
        })
    }

    /// Stores the encoded form of `plaintext`.
    pub fn set_token(&self, plaintext: &str) -> AppResult<()> {
        let encoded = self.codec.encode(plaintext);
        self.update(&[SessionField::Token], |session| session.encoded_token = encoded)
    }

    /// Email and token of a new login, persisted in one write: either both
    /// are stored or neither is.
    pub fn start(&self, email: &str, plaintext: &str) -> AppResult<()> {
        let encoded = self.codec.encode(plaintext);
        self.update(&[SessionField::Email, SessionField::Token], |session| {
            session.email = email.to_string();
            session.encoded_token = encoded;
        })
    }

    /// Resets name, email and token.
    pub fn clear(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            self.storage.remove(SESSION_KEY)?;
            *state = Session::default();
        }
        log::info!("Session cleared");
        self.event_bus.emit(SessionCleared::new());
        Ok(())
    }

    fn update(&self, fields: &[SessionField], apply: impl FnOnce(&mut Session)) -> AppResult<()> {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let mut next = state.clone();
            apply(&mut next);
            self.storage
                .set(SESSION_KEY, &serde_json::to_string(&next)?)?;
            *state = next;
        }
        // Emitted outside the lock so handlers may read the store.
        for field in fields {
            self.event_bus.emit(SessionChanged::new(*field));
        }
        Ok(())
    }
}
