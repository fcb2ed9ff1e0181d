use super::entity::{NewTrainer, Trainer, TrainerForm, TrainerUpdate, TrainerUpdateForm};
use crate::domain::common::{AccountStatus, Gender};
use crate::domain::validation::{self, FieldErrors, PERSON_AGE};

pub fn validate_add_trainer(form: &TrainerForm) -> Result<NewTrainer, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = validation::required(&mut errors, "name", &form.name, "Trainer name is required");
    let age = validation::age(&mut errors, "age", &form.age, PERSON_AGE);
    let phone = validation::phone(&mut errors, "phno", &form.phone);
    let email = validation::email(
        &mut errors,
        "email",
        &form.email,
        "Email is required",
        "Invalid email address",
    );
    let salary = validation::positive_amount(&mut errors, "salary", &form.salary, "Salary");
    let gender: Option<Gender> =
        validation::choice(&mut errors, "gender", &form.gender, "Gender is required");
    let membership_name = validation::required(
        &mut errors,
        "membershipName",
        &form.membership_name,
        "Membership is required",
    );

    errors.finish(|| {
        Some(NewTrainer {
            trainer: Trainer {
                register_no: None,
                trainer_id: None,
                name: name?,
                age: age?,
                phone: phone?,
                email: email?,
                salary: salary?,
                gender: gender?,
                membership: None,
                status: None,
            },
            membership_name: membership_name?,
        })
    })
}

pub fn validate_update_trainer(form: &TrainerUpdateForm) -> Result<TrainerUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();

    let trainer_id = validation::optional_id(
        &mut errors,
        "trainerId",
        form.trainer_id.as_deref(),
        "Trainer ID must be a number",
    );
    let register_no = validation::optional_id(
        &mut errors,
        "registerNo",
        form.register_no.as_deref(),
        "Register number must be a number",
    );
    let name = validation::required(&mut errors, "name", &form.name, "Trainer name is required");
    let age = validation::age(&mut errors, "age", &form.age, PERSON_AGE);
    let phone = validation::phone(&mut errors, "phno", &form.phone);
    let email = validation::email(
        &mut errors,
        "email",
        &form.email,
        "Email is required",
        "Invalid email address",
    );
    let salary = validation::positive_amount(&mut errors, "salary", &form.salary, "Salary");
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
    let original_email = validation::email(
        &mut errors,
        "originalTrainerEmail",
        &form.original_email,
        "Original trainer email is required",
        "Invalid original trainer email address",
    );

    errors.finish(|| {
        Some(TrainerUpdate {
            trainer: Trainer {
                register_no: register_no?,
                trainer_id: trainer_id?,
                name: name?,
                age: age?,
                phone: phone?,
                email: email?,
                salary: salary?,
                gender: gender?,
                membership: None,
                status: Some(status?),
            },
            membership_name: membership_name?,
            original_email: original_email?,
        })
    })
}
