// src/session/policy.rs

use crate::domain::AccountStatus;

/// What a successful update of the signed-in user's own account means for
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionImpact {
    Keep,
    /// The identity key changed; the old token no longer matches.
    EmailChanged,
    /// The account was switched to INACTIVE.
    Deactivated,
}

impl SessionImpact {
    /// The presentation layer must call `logout` and return to the login
    /// screen.
    pub fn requires_relogin(&self) -> bool {
        !matches!(self, SessionImpact::Keep)
    }
}

/// Decides the impact of a successful update on the active session.
///
/// Only updates of the session's own account (`original_email` equal to the
/// session email) can invalidate it. An email change wins over a status
/// change.
pub fn session_impact(
    session_email: &str,
    original_email: &str,
    new_email: &str,
    previous_status: Option<AccountStatus>,
    new_status: Option<AccountStatus>,
) -> SessionImpact {
    if session_email.is_empty() || !session_email.eq_ignore_ascii_case(original_email) {
        return SessionImpact::Keep;
    }
    if new_email != original_email {
        return SessionImpact::EmailChanged;
    }
    if new_status == Some(AccountStatus::Inactive)
        && previous_status != Some(AccountStatus::Inactive)
    {
        return SessionImpact::Deactivated;
    }
    SessionImpact::Keep
}
