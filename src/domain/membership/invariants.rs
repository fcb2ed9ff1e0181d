use super::entity::{Membership, MembershipForm, MembershipUpdateForm};
use crate::domain::common::AccountStatus;
use crate::domain::validation::{self, FieldErrors};

pub fn validate_add_membership(form: &MembershipForm) -> Result<Membership, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = validation::required(&mut errors, "name", &form.name, "Membership name is required");
    let duration =
        validation::required(&mut errors, "duration", &form.duration, "Duration is required");
    let price = validation::positive_amount(&mut errors, "price", &form.price, "Price");

    errors.finish(|| {
        Some(Membership {
            id: None,
            name: name?,
            duration: duration?,
            price: price?,
            status: None,
        })
    })
}

pub fn validate_update_membership(form: &MembershipUpdateForm) -> Result<Membership, FieldErrors> {
    let mut errors = FieldErrors::new();

    let id = validation::numeric_id(&mut errors, "id", &form.id, "Membership ID must be positive")
        .filter(|id| *id > 0);
    if id.is_none() && !errors.contains("id") {
        errors.add("id", "Membership ID must be positive");
    }
    let name = validation::required(&mut errors, "name", &form.name, "Membership name is required");
    let duration =
        validation::required(&mut errors, "duration", &form.duration, "Duration is required");
    let price = validation::positive_amount(&mut errors, "price", &form.price, "Price");
    let status: Option<AccountStatus> = validation::choice(
        &mut errors,
        "status",
        &form.status,
        "Status must be ACTIVE or INACTIVE",
    );

    errors.finish(|| {
        Some(Membership {
            id: Some(id?),
            name: name?,
            duration: duration?,
            price: price?,
            status: Some(status?),
        })
    })
}
