use serde::{Deserialize, Serialize};

use crate::domain::common::{de_opt_u64, de_u32, de_u64, AccountStatus, Gender};
use crate::domain::membership::Membership;
use crate::domain::trainer::Trainer;

/// A gym member as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default, deserialize_with = "de_opt_u64", skip_serializing_if = "Option::is_none")]
    pub register_no: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64", skip_serializing_if = "Option::is_none")]
    pub member_id: Option<u64>,
    pub name: String,
    #[serde(deserialize_with = "de_u32")]
    pub age: u32,
    #[serde(rename = "phno", deserialize_with = "de_u64")]
    pub phone: u64,
    pub email: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer: Option<Trainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership: Option<Membership>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub membership_name: String,
    pub trainer_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemberUpdateForm {
    pub member_id: Option<String>,
    pub register_no: Option<String>,
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub status: String,
    pub membership_name: String,
    pub trainer_id: String,
    pub original_email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub member: Member,
    pub membership_name: String,
    pub trainer_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberUpdate {
    pub member: Member,
    pub membership_name: String,
    pub trainer_id: u64,
    pub original_email: String,
}

impl MemberUpdateForm {
    pub fn from_member(member: &Member) -> Self {
        Self {
            member_id: member.member_id.map(|id| id.to_string()),
            register_no: member.register_no.map(|no| no.to_string()),
            name: member.name.clone(),
            age: member.age.to_string(),
            phone: member.phone.to_string(),
            email: member.email.clone(),
            gender: member.gender.to_string(),
            status: member.status.map(|s| s.to_string()).unwrap_or_default(),
            membership_name: member
                .membership
                .as_ref()
                .map(|m| m.name.clone())
                .unwrap_or_default(),
            trainer_id: member
                .trainer
                .as_ref()
                .and_then(|t| t.trainer_id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
            original_email: member.email.clone(),
        }
    }
}
