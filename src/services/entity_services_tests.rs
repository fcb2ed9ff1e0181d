// src/services/entity_services_tests.rs
//
// Admin, member, trainer, membership and delete actions against a mocked
// backend.

use serde_json::json;

use crate::application::SessionContext;
use crate::domain::{AdminForm, MemberForm, MemberUpdateForm, MembershipUpdateForm, TrainerUpdateForm};
use crate::error::AppError;
use crate::events::{EntityKind, MutationKind};
use crate::integrations::gym_api::MockApiTransport;
use crate::integrations::{ApiResponse, HttpMethod};
use crate::services::admin_service::AdminService;
use crate::services::deletion_service::DeletionService;
use crate::services::form_state::FormState;
use crate::services::gateway::{INTERNAL_ERROR, INVALID_SESSION};
use crate::services::member_service::MemberService;
use crate::services::membership_service::MembershipService;
use crate::services::test_support::{foreign_session, gateway, signed_in, silent_transport, TOKEN};
use crate::services::trainer_service::TrainerService;

fn member_form() -> MemberForm {
    MemberForm {
        name: "Sam Lee".to_string(),
        age: "27".to_string(),
        phone: "9123456780".to_string(),
        email: "sam@gym.com".to_string(),
        gender: "MALE".to_string(),
        membership_name: "Gold".to_string(),
        trainer_id: "7".to_string(),
    }
}

fn trainer_update_form() -> TrainerUpdateForm {
    TrainerUpdateForm {
        trainer_id: Some("3".to_string()),
        register_no: Some("11".to_string()),
        name: "Ana Ruiz".to_string(),
        age: "35".to_string(),
        phone: "9000000000".to_string(),
        email: "b@x.com".to_string(),
        salary: "25000".to_string(),
        gender: "FEMALE".to_string(),
        status: "ACTIVE".to_string(),
        membership_name: "Gold".to_string(),
        original_email: "a@x.com".to_string(),
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

#[tokio::test]
async fn test_add_member_with_negative_age_makes_no_call() {
    let (gateway, mutations) = gateway(silent_transport());
    let service = MemberService::new(gateway);
    let form = MemberForm {
        age: "-5".to_string(),
        ..member_form()
    };

    let state = service
        .add_member(&signed_in(), &FormState::initial(), &form)
        .await;

    assert!(!state.success);
    assert!(state.errors.contains("age"));
    assert_eq!(state.errors.len(), 1);
    assert!(mutations.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_member_sends_one_authenticated_post() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == HttpMethod::Post
                && request.path == "user/addMember"
                && request.query_value("membershipName") == Some("Gold")
                && request.query_value("trainerId") == Some("7")
                && request.bearer.as_deref() == Some(TOKEN)
                && request.body.as_ref().is_some_and(|body| {
                    body["email"] == "sam@gym.com"
                        && body["age"] == 27
                        && body.get("trainer").is_none()
                })
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(201, json!({"message": "created"}))));

    let (gateway, mutations) = gateway(transport);
    let state = MemberService::new(gateway)
        .add_member(&signed_in(), &FormState::initial(), &member_form())
        .await;

    assert!(state.success);
    let mutations = mutations.read().unwrap();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].entity, EntityKind::Member);
    assert_eq!(mutations[0].operation, MutationKind::Created);
    assert_eq!(mutations[0].key, "sam@gym.com");
}

#[tokio::test]
async fn test_add_member_unexpected_2xx_uses_fallback() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, json!({}))));

    let (gateway, mutations) = gateway(transport);
    let state = MemberService::new(gateway)
        .add_member(&signed_in(), &FormState::initial(), &member_form())
        .await;

    assert_eq!(
        state.form_error(),
        Some("Failed to add member. Please try again.")
    );
    assert!(mutations.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_member_error_status_prefers_server_message() {
    let mut transport = MockApiTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Ok(ApiResponse::new(
            409,
            json!({"exceptionMessage": "Email already registered"}),
        ))
    });

    let (gateway, _) = gateway(transport);
    let state = MemberService::new(gateway)
        .add_member(&signed_in(), &FormState::initial(), &member_form())
        .await;

    assert_eq!(state.form_error(), Some("Email already registered"));
}

#[tokio::test]
async fn test_add_member_error_status_without_message() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Ok(ApiResponse::new(500, json!("Internal Server Error"))));

    let (gateway, _) = gateway(transport);
    let state = MemberService::new(gateway)
        .add_member(&signed_in(), &FormState::initial(), &member_form())
        .await;

    assert_eq!(
        state.form_error(),
        Some("Error occurred during adding member. Please try again.")
    );
}

#[tokio::test]
async fn test_invalid_session_makes_no_call() {
    let (gateway, _) = gateway(silent_transport());
    let service = MemberService::new(gateway);

    for ctx in [SessionContext::anonymous(), foreign_session()] {
        let state = service
            .add_member(&ctx, &FormState::initial(), &member_form())
            .await;
        assert_eq!(state.form_error(), Some(INVALID_SESSION));
    }
}

#[tokio::test]
async fn test_update_member_keys_by_original_email() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == HttpMethod::Put
                && request.path == "user/updateMember"
                && request.query_value("memberEmail") == Some("old@gym.com")
                && request.query_value("trainerId") == Some("7")
                && request.body.as_ref().is_some_and(|body| {
                    body["email"] == "new@gym.com"
                        && body["status"] == "INACTIVE"
                        && body["memberId"] == 42
                })
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, json!({}))));

    let form = MemberUpdateForm {
        member_id: Some("42".to_string()),
        register_no: None,
        name: "Sam Lee".to_string(),
        age: "27".to_string(),
        phone: "9123456780".to_string(),
        email: "new@gym.com".to_string(),
        gender: "MALE".to_string(),
        status: "INACTIVE".to_string(),
        membership_name: "Gold".to_string(),
        trainer_id: "7".to_string(),
        original_email: "old@gym.com".to_string(),
    };

    let (gateway, _) = gateway(transport);
    let state = MemberService::new(gateway)
        .update_member(&signed_in(), &FormState::initial(), &form)
        .await;

    assert!(state.success);
}

// ============================================================================
// TRAINERS
// ============================================================================

#[tokio::test]
async fn test_update_trainer_looks_up_original_email_and_sends_new_one() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == HttpMethod::Put
                && request.path == "user/updateTrainer"
                && request.query_value("trainerEmail") == Some("a@x.com")
                && request.query_value("membershipName") == Some("Gold")
                && request
                    .body
                    .as_ref()
                    .is_some_and(|body| body["email"] == "b@x.com" && body["salary"] == "25000")
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, json!({}))));

    let (gateway, mutations) = gateway(transport);
    let state = TrainerService::new(gateway)
        .update_trainer(&signed_in(), &FormState::initial(), &trainer_update_form())
        .await;

    assert!(state.success);
    assert_eq!(mutations.read().unwrap()[0].key, "b@x.com");
}

#[tokio::test]
async fn test_update_trainer_transport_failure() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(AppError::Transport("timed out".to_string())));

    let (gateway, _) = gateway(transport);
    let state = TrainerService::new(gateway)
        .update_trainer(&signed_in(), &FormState::initial(), &trainer_update_form())
        .await;

    assert_eq!(state.form_error(), Some(INTERNAL_ERROR));
}

// ============================================================================
// ADMIN
// ============================================================================

#[tokio::test]
async fn test_update_admin_keys_by_admin_email() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == HttpMethod::Put
                && request.path == "user"
                && request.query_value("adminEmail") == Some("admin@gym.com")
                && request
                    .body
                    .as_ref()
                    .is_some_and(|body| body["phno"] == 9000000001u64 && body["age"] == 40)
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, json!({}))));

    let form = AdminForm {
        id: Some("1".to_string()),
        name: "Alex".to_string(),
        age: "40".to_string(),
        email: "admin@gym.com".to_string(),
        phone: "9000000001".to_string(),
        gender: "OTHERS".to_string(),
        status: Some("ACTIVE".to_string()),
        original_email: "admin@gym.com".to_string(),
    };

    let (gateway, _) = gateway(transport);
    let state = AdminService::new(gateway)
        .update_admin(&signed_in(), &FormState::initial(), &form)
        .await;

    assert!(state.success);
}

#[tokio::test]
async fn test_admin_age_out_of_range_makes_no_call() {
    let form = AdminForm {
        name: "Alex".to_string(),
        age: "121".to_string(),
        email: "admin@gym.com".to_string(),
        phone: "9000000001".to_string(),
        gender: "OTHERS".to_string(),
        original_email: "admin@gym.com".to_string(),
        ..AdminForm::default()
    };

    let (gateway, _) = gateway(silent_transport());
    let state = AdminService::new(gateway)
        .update_admin(&signed_in(), &FormState::initial(), &form)
        .await;

    assert_eq!(
        state.errors.get("age").unwrap(),
        &["Age must be between 10 and 120".to_string()]
    );
}

// ============================================================================
// MEMBERSHIPS
// ============================================================================

#[tokio::test]
async fn test_update_membership_sends_id_and_price_as_text() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.path == "user/updateMembership"
                && request.query.is_empty()
                && request.body.as_ref().is_some_and(|body| {
                    body["id"] == 5 && body["price"] == "49.99" && body["status"] == "ACTIVE"
                })
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, json!({}))));

    let form = MembershipUpdateForm {
        id: "5".to_string(),
        name: "Gold".to_string(),
        duration: "3 months".to_string(),
        price: "49.99".to_string(),
        status: "ACTIVE".to_string(),
    };

    let (gateway, mutations) = gateway(transport);
    let state = MembershipService::new(gateway)
        .update_membership(&signed_in(), &FormState::initial(), &form)
        .await;

    assert!(state.success);
    assert_eq!(mutations.read().unwrap()[0].entity, EntityKind::Membership);
}

// ============================================================================
// DELETE
// ============================================================================

#[tokio::test]
async fn test_delete_member() {
    let mut transport = MockApiTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == HttpMethod::Delete
                && request.path == "user/deleteUsers"
                && request.query_value("deleteRole") == Some("member")
                && request.query_value("deleteValue") == Some("sam@gym.com")
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, json!({"message": "deleted"}))));

    let (gateway, mutations) = gateway(transport);
    let state = DeletionService::new(gateway)
        .delete(&signed_in(), &FormState::initial(), "member", "sam@gym.com")
        .await;

    assert!(state.success);
    assert_eq!(mutations.read().unwrap()[0].operation, MutationKind::Deleted);
}

#[tokio::test]
async fn test_delete_unknown_role_makes_no_call() {
    let (gateway, _) = gateway(silent_transport());
    let state = DeletionService::new(gateway)
        .delete(&signed_in(), &FormState::initial(), "admin", "a@x.com")
        .await;

    assert!(state.errors.contains("deleteRole"));
}

// ============================================================================
// RESULT TIMESTAMPS
// ============================================================================

#[tokio::test]
async fn test_repeated_identical_failures_are_distinguishable() {
    let (gateway, _) = gateway(silent_transport());
    let service = MemberService::new(gateway);
    let form = MemberForm {
        age: "-5".to_string(),
        ..member_form()
    };

    let first = service
        .add_member(&signed_in(), &FormState::initial(), &form)
        .await;
    let second = service.add_member(&signed_in(), &first, &form).await;

    assert_eq!(first.errors, second.errors);
    assert!(second.timestamp > first.timestamp);
}
