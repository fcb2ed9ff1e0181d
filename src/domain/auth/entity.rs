use serde::Serialize;

use crate::domain::common::Gender;

/// Raw self-registration input.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
}

/// Body of `POST api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub age: u32,
    pub email: String,
    #[serde(rename = "phno")]
    pub phone: u64,
    pub gender: Gender,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub otp: String,
}

/// Body of `POST api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub otp: String,
}
