// src/domain/mod.rs
//
// Domain Root - records exchanged with the gym backend and the validators
// that gate every form before it reaches the network.
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod admin;
pub mod auth;
pub mod common;
pub mod deletion;
pub mod member;
pub mod membership;
pub mod trainer;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use common::{AccountStatus, Gender, Role};
pub use validation::{FieldErrors, FORM_ERRORS};

// Admin
pub use admin::{validate_admin_update, Admin, AdminForm, AdminUpdate};

// Auth
pub use auth::{
    validate_login, validate_otp_request, validate_register, LoginCredentials, LoginForm,
    RegisterForm, Registration,
};

// Member
pub use member::{
    validate_add_member, validate_update_member, Member, MemberForm, MemberUpdate,
    MemberUpdateForm, NewMember,
};

// Trainer
pub use trainer::{
    validate_add_trainer, validate_update_trainer, NewTrainer, Trainer, TrainerForm,
    TrainerUpdate, TrainerUpdateForm,
};

// Membership
pub use membership::{
    validate_add_membership, validate_update_membership, Membership, MembershipForm,
    MembershipUpdateForm,
};

// Deletion
pub use deletion::{validate_delete, DeleteRole, Deletion};
