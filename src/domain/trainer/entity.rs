use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{de_opt_u64, de_u32, de_u64, AccountStatus, Gender};
use crate::domain::membership::Membership;

/// A trainer as exchanged with the backend.
///
/// `register_no` is the internal key, `trainer_id` the number shown to staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    #[serde(default, deserialize_with = "de_opt_u64", skip_serializing_if = "Option::is_none")]
    pub register_no: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64", skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<u64>,
    pub name: String,
    #[serde(deserialize_with = "de_u32")]
    pub age: u32,
    #[serde(rename = "phno", deserialize_with = "de_u64")]
    pub phone: u64,
    pub email: String,
    pub salary: Decimal,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership: Option<Membership>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct TrainerForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub salary: String,
    pub gender: String,
    pub membership_name: String,
}

/// Raw edit input. `original_email` is captured when the edit opens.
#[derive(Debug, Clone, Default)]
pub struct TrainerUpdateForm {
    pub trainer_id: Option<String>,
    pub register_no: Option<String>,
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub salary: String,
    pub gender: String,
    pub status: String,
    pub membership_name: String,
    pub original_email: String,
}

/// Validated add-trainer input; the plan travels as a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrainer {
    pub trainer: Trainer,
    pub membership_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerUpdate {
    pub trainer: Trainer,
    pub membership_name: String,
    pub original_email: String,
}

impl TrainerUpdateForm {
    pub fn from_trainer(trainer: &Trainer) -> Self {
        Self {
            trainer_id: trainer.trainer_id.map(|id| id.to_string()),
            register_no: trainer.register_no.map(|no| no.to_string()),
            name: trainer.name.clone(),
            age: trainer.age.to_string(),
            phone: trainer.phone.to_string(),
            email: trainer.email.clone(),
            salary: trainer.salary.to_string(),
            gender: trainer.gender.to_string(),
            status: trainer.status.map(|s| s.to_string()).unwrap_or_default(),
            membership_name: trainer
                .membership
                .as_ref()
                .map(|m| m.name.clone())
                .unwrap_or_default(),
            original_email: trainer.email.clone(),
        }
    }
}
