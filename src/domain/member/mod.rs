pub mod entity;
pub mod invariants;

pub use entity::{Member, MemberForm, MemberUpdate, MemberUpdateForm, NewMember};
pub use invariants::{validate_add_member, validate_update_member};
