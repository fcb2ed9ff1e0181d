// src/services/auth_service.rs
//
// Unauthenticated actions: self-registration, OTP request and login.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    validate_login, validate_otp_request, validate_register, FieldErrors, LoginForm,
    RegisterForm, Role,
};
use crate::events::{EntityKind, EntityMutated, MutationKind};
use crate::integrations::{ApiRequest, ResponseEnvelope};
use crate::services::form_state::FormState;
use crate::services::gateway::{ApiGateway, Submission};

const REGISTER: Submission = Submission {
    expected_status: 201,
    rejected: "Registration failed. Please try again.",
    errored: "Error occurred during registration. Please try again.",
};

const SEND_OTP: Submission = Submission {
    expected_status: 200,
    rejected: "Failed to send OTP. Please try again.",
    errored: "Error While Sending the OTP, Please Try Again",
};

const LOGIN: Submission = Submission {
    expected_status: 200,
    rejected: "Login failed. Please try again.",
    errored: "Error occurred during login. Please try again.",
};

/// Result of a login attempt.
///
/// On success `token` holds the plaintext bearer token and `message` the
/// role-prefixed server message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub state: FormState,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn failed(previous: &FormState, errors: FieldErrors) -> Self {
        Self {
            state: FormState::failed(previous, errors),
            token: None,
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state.success
    }

    /// Role named by the server message.
    pub fn role(&self) -> Option<Role> {
        self.message.as_deref().and_then(Role::from_login_message)
    }

    /// `/admin`, `/trainer` or `/member`.
    pub fn landing_route(&self) -> Option<&'static str> {
        self.role().map(|role| role.landing_route())
    }
}

pub struct AuthService {
    gateway: Arc<ApiGateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn register(&self, previous: &FormState, form: &RegisterForm) -> FormState {
        let registration = match validate_register(form) {
            Ok(registration) => registration,
            Err(errors) => return FormState::failed(previous, errors),
        };

        let result = async {
            let request = ApiRequest::post("api/auth/register")
                .json(&registration)
                .map_err(ApiGateway::internal)?;
            self.gateway.submit(request, &REGISTER).await?;
            self.gateway.emit(EntityMutated::new(
                EntityKind::Registration,
                MutationKind::Created,
                registration.email.clone(),
            ));
            Ok(())
        }
        .await;

        FormState::from_result(previous, result)
    }

    pub async fn send_otp(&self, previous: &FormState, email: &str) -> FormState {
        let email = match validate_otp_request(email) {
            Ok(email) => email,
            Err(errors) => return FormState::failed(previous, errors),
        };

        let request = ApiRequest::get("api/auth/send-otp-email").query("email", &email);
        let result = self.gateway.submit(request, &SEND_OTP).await.map(|_| ());

        FormState::from_result(previous, result)
    }

    /// Does not touch the session; see `AppState::complete_login`.
    pub async fn login(&self, previous: &FormState, form: &LoginForm) -> LoginOutcome {
        let credentials = match validate_login(form) {
            Ok(credentials) => credentials,
            Err(errors) => return LoginOutcome::failed(previous, errors),
        };

        let request = match ApiRequest::post("api/auth/login").json(&credentials) {
            Ok(request) => request,
            Err(e) => return LoginOutcome::failed(previous, ApiGateway::internal(e)),
        };

        let response = match self.gateway.submit(request, &LOGIN).await {
            Ok(response) => response,
            Err(errors) => return LoginOutcome::failed(previous, errors),
        };

        let envelope = ResponseEnvelope::lenient(&response.body);
        match envelope.body {
            Some(Value::String(token)) if !token.is_empty() => {
                log::info!("Login accepted for {}", credentials.email);
                LoginOutcome {
                    state: FormState::succeeded(previous),
                    token: Some(token),
                    message: envelope.message,
                }
            }
            _ => {
                let message = envelope
                    .exception_message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| LOGIN.rejected.to_string());
                LoginOutcome::failed(previous, FieldErrors::form(message))
            }
        }
    }
}
