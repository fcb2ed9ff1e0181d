use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{de_opt_u64, AccountStatus};

/// A membership plan.
///
/// Other entities and several endpoints refer to a plan by `name`, not `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(default, deserialize_with = "de_opt_u64", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    /// Free text, e.g. "3 months".
    pub duration: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct MembershipForm {
    pub name: String,
    pub duration: String,
    pub price: String,
}

#[derive(Debug, Clone, Default)]
pub struct MembershipUpdateForm {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub price: String,
    pub status: String,
}

impl MembershipUpdateForm {
    pub fn from_membership(membership: &Membership) -> Self {
        Self {
            id: membership.id.map(|id| id.to_string()).unwrap_or_default(),
            name: membership.name.clone(),
            duration: membership.duration.clone(),
            price: membership.price.to_string(),
            status: membership.status.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}
