pub mod entity;
pub mod invariants;

pub use entity::{Membership, MembershipForm, MembershipUpdateForm};
pub use invariants::{validate_add_membership, validate_update_membership};
