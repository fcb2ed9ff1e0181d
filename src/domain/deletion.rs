// src/domain/deletion.rs
//
// Removal of inactive members, trainers and memberships.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::validation::{self, FieldErrors};

/// Kind of record a delete targets.
///
/// Members and trainers are addressed by email, memberships by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteRole {
    Member,
    Trainer,
    Membership,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub role: DeleteRole,
    pub value: String,
}

impl DeleteRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteRole::Member => "member",
            DeleteRole::Trainer => "trainer",
            DeleteRole::Membership => "membership",
        }
    }
}

impl FromStr for DeleteRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(DeleteRole::Member),
            "trainer" => Ok(DeleteRole::Trainer),
            "membership" => Ok(DeleteRole::Membership),
            other => Err(format!("Unknown delete role: {}", other)),
        }
    }
}

pub fn validate_delete(role: &str, value: &str) -> Result<Deletion, FieldErrors> {
    let mut errors = FieldErrors::new();

    let role: Option<DeleteRole> = validation::choice(
        &mut errors,
        "deleteRole",
        role,
        "Delete role must be member, trainer or membership",
    );
    let value = match role {
        Some(DeleteRole::Member) | Some(DeleteRole::Trainer) => validation::email(
            &mut errors,
            "deleteValue",
            value,
            "A value to delete is required",
            "Invalid email address",
        ),
        _ => validation::required(
            &mut errors,
            "deleteValue",
            value,
            "A value to delete is required",
        ),
    };

    errors.finish(|| {
        Some(Deletion {
            role: role?,
            value: value?,
        })
    })
}
