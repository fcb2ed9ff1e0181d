use serde::{Deserialize, Serialize};

use crate::domain::common::{de_opt_text, de_u32, de_u64, AccountStatus, Gender};

/// An administrator account as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(rename = "phno", deserialize_with = "de_u64")]
    pub phone: u64,
    #[serde(deserialize_with = "de_u32")]
    pub age: u32,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

/// Raw profile-edit input.
///
/// `original_email` is the address the admin had when the form opened; the
/// backend locates the record by it, not by the (possibly edited) `email`.
#[derive(Debug, Clone, Default)]
pub struct AdminForm {
    pub id: Option<String>,
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub status: Option<String>,
    pub original_email: String,
}

/// A validated profile edit.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUpdate {
    pub admin: Admin,
    pub original_email: String,
}

impl AdminForm {
    /// Pre-fill the form from the record being edited.
    pub fn from_admin(admin: &Admin) -> Self {
        Self {
            id: admin.id.clone(),
            name: admin.name.clone(),
            age: admin.age.to_string(),
            email: admin.email.clone(),
            phone: admin.phone.to_string(),
            gender: admin.gender.to_string(),
            status: admin.status.map(|s| s.to_string()),
            original_email: admin.email.clone(),
        }
    }
}
