use super::entity::{Admin, AdminForm, AdminUpdate};
use crate::domain::common::{AccountStatus, Gender};
use crate::domain::validation::{self, FieldErrors, ADMIN_AGE};

/// Validates an admin profile edit.
///
/// Admin ages are bounded to 10..=120, unlike members and trainers.
pub fn validate_admin_update(form: &AdminForm) -> Result<AdminUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = validation::required(&mut errors, "name", &form.name, "Name is required");
    let age = validation::age(&mut errors, "age", &form.age, ADMIN_AGE);
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

    // Status is optional on the profile form
    let status = match form.status.as_deref().map(str::trim) {
        None | Some("") => Some(None),
        Some(raw) => validation::choice::<AccountStatus>(
            &mut errors,
            "status",
            raw,
            "Status must be ACTIVE or INACTIVE",
        )
        .map(Some),
    };

    let original_email = validation::email(
        &mut errors,
        "originalAdminEmail",
        &form.original_email,
        "Original admin email is required",
        "Invalid original admin email address",
    );

    errors.finish(|| {
        Some(AdminUpdate {
            admin: Admin {
                id: form.id.clone().filter(|id| !id.trim().is_empty()),
                name: name?,
                email: email?,
                phone: phone?,
                age: age?,
                gender: gender?,
                status: status?,
            },
            original_email: original_email?,
        })
    })
}
