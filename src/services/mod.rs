// src/services/mod.rs
//
// Services Module - Action and Query functions
//
// Every action validates, decodes the session token, issues exactly one
// request and returns a FormState. Every query returns data or an empty
// result, never an error, except the lookups by email.

pub mod admin_service;
pub mod auth_service;
pub mod deletion_service;
pub mod form_state;
pub mod gateway;
pub mod member_service;
pub mod membership_service;
pub mod query;
pub mod trainer_service;

#[cfg(test)]
mod test_support;


#[cfg(test)]
mod entity_services_tests;


pub use admin_service::AdminService;
pub use auth_service::{AuthService, LoginOutcome};
pub use deletion_service::DeletionService;
pub use form_state::FormState;
pub use gateway::{ApiGateway, Submission, INTERNAL_ERROR, INVALID_SESSION};
pub use member_service::MemberService;
pub use membership_service::MembershipService;
pub use query::{Page, PageRequest, StatusFilter};
pub use trainer_service::TrainerService;
