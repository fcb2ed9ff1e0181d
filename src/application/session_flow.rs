// src/application/session_flow.rs
//
// Flows that read or change the signed-in session around a service call.
//
// RULES:
// - Services never touch the session; these flows are the only writers
//   besides `logout`
// - A flow that needs a re-login reports it, it does not navigate

use std::str::FromStr;

use serde::Serialize;

use crate::domain::{AccountStatus, Admin, AdminForm, FieldErrors, LoginForm, Member, Role, Trainer};
use crate::error::{AppError, AppResult};
use crate::services::{FormState, LoginOutcome, INTERNAL_ERROR};
use crate::session::{session_impact, SessionImpact};

use super::AppState;

/// Profile shown on the landing page of each role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", content = "profile", rename_all = "UPPERCASE")]
pub enum HomeProfile {
    Admin(Admin),
    Trainer(Trainer),
    Member(Member),
}

impl HomeProfile {
    pub fn name(&self) -> &str {
        match self {
            HomeProfile::Admin(admin) => &admin.name,
            HomeProfile::Trainer(trainer) => &trainer.name,
            HomeProfile::Member(member) => &member.name,
        }
    }
}

impl AppState {
    /// Stores email and token of a successful login in one write.
    ///
    /// `email` is trimmed the same way the login validator trims it.
    /// Returns the role to route to, or `None` when the outcome was not a
    /// success (the session is left untouched).
    pub fn complete_login(&self, email: &str, outcome: &LoginOutcome) -> AppResult<Option<Role>> {
        let token = match (&outcome.token, outcome.is_success()) {
            (Some(token), true) => token,
            _ => return Ok(None),
        };

        self.session.start(email.trim(), token)?;
        Ok(outcome.role())
    }

    /// Login followed by `complete_login`.
    ///
    /// A session that cannot be persisted turns the outcome into a failure.
    pub async fn sign_in(&self, previous: &FormState, form: &LoginForm) -> LoginOutcome {
        let outcome = self.auth_service.login(previous, form).await;
        if !outcome.is_success() {
            return outcome;
        }

        match self.complete_login(&form.email, &outcome) {
            Ok(_) => outcome,
            Err(e) => {
                log::error!("Failed to store session after login: {}", e);
                LoginOutcome {
                    state: FormState::failed(previous, FieldErrors::form(INTERNAL_ERROR)),
                    token: None,
                    message: None,
                }
            }
        }
    }

    /// Fetches the signed-in user's own record and fills in the session
    /// name if it is missing or stale.
    pub async fn load_home_profile(&self, role: Role) -> AppResult<HomeProfile> {
        let ctx = self.context();
        if ctx.email().is_empty() {
            return Err(AppError::InvalidSession);
        }

        let profile = match role {
            Role::Admin => HomeProfile::Admin(
                self.admin_service
                    .find_admin_by_email(&ctx, ctx.email())
                    .await?,
            ),
            Role::Trainer => HomeProfile::Trainer(
                self.trainer_service
                    .find_trainer_by_email(&ctx, ctx.email())
                    .await?,
            ),
            Role::Member => HomeProfile::Member(
                self.member_service
                    .find_member_by_email(&ctx, ctx.email())
                    .await?,
            ),
        };

        if profile.name() != ctx.name() {
            self.session.set_name(profile.name())?;
        }
        Ok(profile)
    }

    /// Updates the signed-in admin's own profile.
    ///
    /// `current` is the record the form was opened with. On success the
    /// session name follows the edit; the impact says whether the caller
    /// must log out.
    pub async fn update_own_admin_profile(
        &self,
        previous: &FormState,
        form: &AdminForm,
        current: &Admin,
    ) -> (FormState, SessionImpact) {
        let ctx = self.context();
        let state = self.admin_service.update_admin(&ctx, previous, form).await;
        if !state.success {
            return (state, SessionImpact::Keep);
        }

        let new_status = form
            .status
            .as_deref()
            .and_then(|status| AccountStatus::from_str(status).ok());
        let impact = session_impact(
            ctx.email(),
            form.original_email.trim(),
            form.email.trim(),
            current.status,
            new_status,
        );

        if impact == SessionImpact::Keep && form.name.trim() != ctx.name() {
            if let Err(e) = self.session.set_name(form.name.trim()) {
                log::warn!("Failed to refresh session name: {}", e);
            }
        }
        (state, impact)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.session.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::CredentialCodec;
    use crate::domain::Gender;
    use crate::events::{EventBus, SessionCleared};
    use crate::integrations::gym_api::MockApiTransport;
    use crate::integrations::{ApiResponse, HttpMethod};
    use crate::session::{MemorySessionStorage, SessionStorage};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const SECRET: &str = "flow-secret";

    fn state_with(transport: MockApiTransport) -> AppState {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemorySessionStorage::new());
        AppState::with_parts(
            Arc::new(transport),
            storage,
            Arc::new(CredentialCodec::new(SECRET)),
            Arc::new(EventBus::new()),
        )
        .unwrap()
    }

    fn login_form() -> LoginForm {
        LoginForm {
            email: "admin@gym.com".to_string(),
            otp: "123456".to_string(),
        }
    }

    fn admin(name: &str, email: &str) -> Admin {
        Admin {
            id: Some("1".to_string()),
            name: name.to_string(),
            email: email.to_string(),
            phone: 9876543210,
            age: 40,
            gender: Gender::Male,
            status: Some(AccountStatus::Active),
        }
    }

    fn expect_login(transport: &mut MockApiTransport) {
        transport
            .expect_send()
            .withf(|request| request.path == "api/auth/login")
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, json!({"body": "jwt-1", "message": "ADMIN:ok"}))));
    }

    fn expect_admin_update(transport: &mut MockApiTransport) {
        transport
            .expect_send()
            .withf(|request| request.method == HttpMethod::Put && request.path == "user")
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, json!({"body": null}))));
    }

    #[tokio::test]
    async fn test_sign_in_stores_email_and_encoded_token() {
        let mut transport = MockApiTransport::new();
        expect_login(&mut transport);
        let state = state_with(transport);

        let outcome = state.sign_in(&FormState::initial(), &login_form()).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.landing_route(), Some("/admin"));
        let session = state.session.snapshot();
        assert_eq!(session.email, "admin@gym.com");
        assert_ne!(session.encoded_token, "jwt-1");
        assert_eq!(CredentialCodec::new(SECRET).decode(&session.encoded_token), "jwt-1");
    }

    #[tokio::test]
    async fn test_padded_login_email_is_stored_trimmed() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.path == "api/auth/login"
                    && request
                        .body
                        .as_ref()
                        .is_some_and(|body| body["email"] == "admin@gym.com")
            })
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, json!({"body": "jwt-1", "message": "ADMIN:ok"}))));
        transport
            .expect_send()
            .withf(|request| {
                request.path == "user/getAdminDetails"
                    && request.query_value("email") == Some("admin@gym.com")
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::new(
                    200,
                    json!({"body": {"id": "1", "name": "Alex", "email": "admin@gym.com",
                        "phno": "9876543210", "age": 40, "gender": "MALE", "status": "ACTIVE"}}),
                ))
            });
        let state = state_with(transport);
        let form = LoginForm {
            email: "  admin@gym.com ".to_string(),
            otp: "123456".to_string(),
        };

        let outcome = state.sign_in(&FormState::initial(), &form).await;

        assert!(outcome.is_success());
        assert_eq!(state.session.snapshot().email, "admin@gym.com");
        let profile = state.load_home_profile(Role::Admin).await.unwrap();
        assert_eq!(profile.name(), "Alex");
    }

    #[tokio::test]
    async fn test_padded_original_email_still_matches_session() {
        let mut transport = MockApiTransport::new();
        expect_login(&mut transport);
        expect_admin_update(&mut transport);
        let state = state_with(transport);
        state.sign_in(&FormState::initial(), &login_form()).await;

        let current = admin("Alex", "admin@gym.com");
        let mut form = AdminForm::from_admin(&current);
        form.original_email = " admin@gym.com ".to_string();
        form.status = Some("INACTIVE".to_string());

        let (form_state, impact) = state
            .update_own_admin_profile(&FormState::initial(), &form, &current)
            .await;

        assert!(form_state.success);
        assert_eq!(impact, SessionImpact::Deactivated);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(ApiResponse::new(401, json!({"exceptionMessage": "Invalid OTP"}))));
        let state = state_with(transport);

        let outcome = state.sign_in(&FormState::initial(), &login_form()).await;

        assert!(!outcome.is_success());
        assert!(!state.session.snapshot().is_authenticated());
        assert_eq!(state.session.snapshot().email, "");
    }

    #[tokio::test]
    async fn test_home_profile_sets_session_name() {
        let mut transport = MockApiTransport::new();
        expect_login(&mut transport);
        transport
            .expect_send()
            .withf(|request| {
                request.path == "user/getAdminDetails"
                    && request.query_value("email") == Some("admin@gym.com")
                    && request.bearer.as_deref() == Some("jwt-1")
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::new(
                    200,
                    json!({"body": {"id": "1", "name": "Alex", "email": "admin@gym.com",
                        "phno": "9876543210", "age": 40, "gender": "MALE", "status": "ACTIVE"}}),
                ))
            });
        let state = state_with(transport);
        state.sign_in(&FormState::initial(), &login_form()).await;

        let profile = state.load_home_profile(Role::Admin).await.unwrap();

        assert_eq!(profile.name(), "Alex");
        assert_eq!(state.session.snapshot().name, "Alex");
    }

    #[tokio::test]
    async fn test_home_profile_without_session_is_invalid() {
        let mut transport = MockApiTransport::new();
        transport.expect_send().never();
        let state = state_with(transport);

        let result = state.load_home_profile(Role::Trainer).await;
        assert!(matches!(result, Err(AppError::InvalidSession)));
    }

    #[tokio::test]
    async fn test_own_email_change_requires_relogin() {
        let mut transport = MockApiTransport::new();
        expect_login(&mut transport);
        expect_admin_update(&mut transport);
        let state = state_with(transport);
        state.sign_in(&FormState::initial(), &login_form()).await;

        let current = admin("Alex", "admin@gym.com");
        let mut form = AdminForm::from_admin(&current);
        form.email = "new@gym.com".to_string();

        let (form_state, impact) = state
            .update_own_admin_profile(&FormState::initial(), &form, &current)
            .await;

        assert!(form_state.success);
        assert_eq!(impact, SessionImpact::EmailChanged);
        assert!(impact.requires_relogin());
    }

    #[tokio::test]
    async fn test_own_name_change_refreshes_session_name() {
        let mut transport = MockApiTransport::new();
        expect_login(&mut transport);
        expect_admin_update(&mut transport);
        let state = state_with(transport);
        state.sign_in(&FormState::initial(), &login_form()).await;

        let current = admin("Alex", "admin@gym.com");
        let mut form = AdminForm::from_admin(&current);
        form.name = "Alexandra".to_string();

        let (_, impact) = state
            .update_own_admin_profile(&FormState::initial(), &form, &current)
            .await;

        assert_eq!(impact, SessionImpact::Keep);
        assert_eq!(state.session.snapshot().name, "Alexandra");
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_notifies() {
        let mut transport = MockApiTransport::new();
        expect_login(&mut transport);
        let state = state_with(transport);
        let cleared = Arc::new(AtomicUsize::new(0));
        let cleared_clone = Arc::clone(&cleared);
        state
            .event_bus
            .subscribe::<SessionCleared, _>(move |_| {
                cleared_clone.fetch_add(1, Ordering::SeqCst);
            });

        state.sign_in(&FormState::initial(), &login_form()).await;
        state.logout().unwrap();

        assert!(!state.session.snapshot().is_authenticated());
        assert!(!state.context().has_token());
        assert_eq!(cleared.load(Ordering::SeqCst), 1);
    }
}
