pub mod entity;
pub mod invariants;

pub use entity::{Admin, AdminForm, AdminUpdate};
pub use invariants::validate_admin_update;
