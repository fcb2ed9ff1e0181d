// src/application/context.rs
//
// Explicit session context passed to every action and query call.

use serde::{Deserialize, Serialize};

/// Snapshot of the signed-in identity.
///
/// Holds the token in encoded form; services decode it per call.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    name: String,
    email: String,
    encoded_token: String,
}

impl SessionContext {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        encoded_token: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            encoded_token: encoded_token.into(),
        }
    }

    /// Context with no signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn encoded_token(&self) -> &str {
        &self.encoded_token
    }

    pub fn has_token(&self) -> bool {
        !self.encoded_token.is_empty()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("encoded_token", &"<redacted>")
            .finish()
    }
}
