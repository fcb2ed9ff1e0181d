use super::entity::{LoginCredentials, LoginForm, RegisterForm, Registration};
use crate::domain::common::Gender;
use crate::domain::validation::{self, FieldErrors, PERSON_AGE};

const OTP_MIN_LEN: usize = 6;

pub fn validate_register(form: &RegisterForm) -> Result<Registration, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = validation::required(&mut errors, "name", &form.name, "Name is required");
    let age = validation::age(&mut errors, "age", &form.age, PERSON_AGE);
    let email = validation::email(
        &mut errors,
        "email",
        &form.email,
        "Valid Email address is required",
        "Valid Email address is required",
    );
    let phone = validation::phone(&mut errors, "phno", &form.phone);
    let gender: Option<Gender> =
        validation::choice(&mut errors, "gender", &form.gender, "Select a valid gender");

    errors.finish(|| {
        Some(Registration {
            name: name?,
            age: age?,
            email: email?,
            phone: phone?,
            gender: gender?,
        })
    })
}

pub fn validate_login(form: &LoginForm) -> Result<LoginCredentials, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = validation::email(
        &mut errors,
        "email",
        &form.email,
        "Valid Email address is required",
        "Valid Email address is required",
    );
    let otp = form.otp.trim();
    if otp.chars().count() < OTP_MIN_LEN {
        errors.add("otp", "OTP must be of 6 digits");
    }

    errors.finish(|| {
        Some(LoginCredentials {
            email: email?,
            otp: otp.to_string(),
        })
    })
}

/// Address an OTP should be mailed to.
pub fn validate_otp_request(email: &str) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = validation::email(
        &mut errors,
        "email",
        email,
        "Email is required to send OTP",
        "Email Is Required To Send OTP",
    );
    errors.finish(|| email)
}
