use super::entity::{Member, MemberForm, MemberUpdate, MemberUpdateForm, NewMember};
use crate::domain::common::{AccountStatus, Gender};
use crate::domain::validation::{self, FieldErrors, PERSON_AGE};

pub fn validate_add_member(form: &MemberForm) -> Result<NewMember, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = validation::required(&mut errors, "name", &form.name, "Member name is required");
    let age = validation::age(&mut errors, "age", &form.age, PERSON_AGE);
    let phone = validation::phone(&mut errors, "phno", &form.phone);
    let email = validation::email(
        &mut errors,
        "email",
        &form.email,
        "Email is required",
        "Invalid email address",
    );
    let gender: Option<Gender> =
        validation::choice(&mut errors, "gender", &form.gender, "Gender is required");
    let membership_name = validation::required(
        &mut errors,
        "membershipName",
        &form.membership_name,
        "Membership is required",
    );
    let trainer_id =
        validation::numeric_id(&mut errors, "trainerId", &form.trainer_id, "Trainer is required");

    errors.finish(|| {
        Some(NewMember {
            member: Member {
                register_no: None,
                member_id: None,
                name: name?,
                age: age?,
                phone: phone?,
                email: email?,
                gender: gender?,
                trainer: None,
                membership: None,
                status: None,
            },
            membership_name: membership_name?,
            trainer_id: trainer_id?,
        })
    })
}

pub fn validate_update_member(form: &MemberUpdateForm) -> Result<MemberUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();

    let member_id = validation::optional_id(
        &mut errors,
        "memberId",
        form.member_id.as_deref(),
        "Member ID must be a number",
    );
    let register_no = validation::optional_id(
        &mut errors,
        "registerNo",
        form.register_no.as_deref(),
        "Register number must be a number",
    );
    let name = validation::required(&mut errors, "name", &form.name, "Member name is required");
    let age = validation::age(&mut errors, "age", &form.age, PERSON_AGE);
    let phone = validation::phone(&mut errors, "phno", &form.phone);
    let email = validation::email(
        &mut errors,
        "email",
        &form.email,
        "Email is required",
        "Invalid email address",
    );
    let gender: Option<Gender> =
        validation::choice(&mut errors, "gender", &form.gender, "Gender is required");
    let status: Option<AccountStatus> = validation::choice(
        &mut errors,
        "status",
        &form.status,
        "Status must be ACTIVE or INACTIVE",
    );
    let membership_name = validation::required(
        &mut errors,
        "membershipName",
        &form.membership_name,
        "Membership is required",
    );
    let trainer_id =
        validation::numeric_id(&mut errors, "trainerId", &form.trainer_id, "Trainer is required");
    let original_email = validation::email(
        &mut errors,
        "originalMemberEmail",
        &form.original_email,
        "Original member email is required",
        "Invalid original member email address",
    );

    errors.finish(|| {
        Some(MemberUpdate {
            member: Member {
                register_no: register_no?,
                member_id: member_id?,
                name: name?,
                age: age?,
                phone: phone?,
                email: email?,
                gender: gender?,
                trainer: None,
                membership: None,
                status: Some(status?),
            },
            membership_name: membership_name?,
            trainer_id: trainer_id?,
            original_email: original_email?,
        })
    })
}
