pub mod entity;
pub mod invariants;

pub use entity::{LoginCredentials, LoginForm, RegisterForm, Registration};
pub use invariants::{validate_login, validate_otp_request, validate_register};
