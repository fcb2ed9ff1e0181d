// src/services/trainer_service.rs

use std::sync::Arc;

use crate::application::SessionContext;
use crate::domain::{
    validate_add_trainer, validate_update_trainer, FieldErrors, Member, NewTrainer, Trainer,
    TrainerForm, TrainerUpdate, TrainerUpdateForm,
};
use crate::error::AppResult;
use crate::events::{EntityKind, EntityMutated, MutationKind};
use crate::integrations::ApiRequest;
use crate::services::form_state::FormState;
use crate::services::gateway::{ApiGateway, Submission};
use crate::services::query::{Page, PageRequest, StatusFilter};

const ADD_TRAINER: Submission = Submission {
    expected_status: 201,
    rejected: "Failed to add trainer. Please try again.",
    errored: "Error occurred during adding trainer. Please try again.",
};

const UPDATE_TRAINER: Submission = Submission {
    expected_status: 200,
    rejected: "Failed to update trainer. Please try again.",
    errored: "Error occurred during updating trainer. Please try again.",
};

const UNIQUE_KEYS: [&str; 2] = ["trainerId", "email"];

pub struct TrainerService {
    gateway: Arc<ApiGateway>,
}

impl TrainerService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// `POST user/addTrainer?membershipName=`
    pub async fn add_trainer(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &TrainerForm,
    ) -> FormState {
        let result = match validate_add_trainer(form) {
            Ok(draft) => self.submit_add(ctx, draft).await,
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    /// `PUT user/updateTrainer?trainerEmail=<original>&membershipName=`
    ///
    /// The trainer is looked up by the email it had when the edit began;
    /// the body carries the new one.
    pub async fn update_trainer(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &TrainerUpdateForm,
    ) -> FormState {
        let result = match validate_update_trainer(form) {
            Ok(update) => self.submit_update(ctx, update).await,
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    async fn submit_add(&self, ctx: &SessionContext, draft: NewTrainer) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = ApiRequest::post("user/addTrainer")
            .query("membershipName", &draft.membership_name)
            .bearer(token)
            .json(&draft.trainer)
            .map_err(ApiGateway::internal)?;

        self.gateway.submit(request, &ADD_TRAINER).await?;
        self.gateway.emit(EntityMutated::new(
            EntityKind::Trainer,
            MutationKind::Created,
            draft.trainer.email,
        ));
        Ok(())
    }

    async fn submit_update(
        &self,
        ctx: &SessionContext,
        update: TrainerUpdate,
    ) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = ApiRequest::put("user/updateTrainer")
            .query("trainerEmail", &update.original_email)
            .query("membershipName", &update.membership_name)
            .bearer(token)
            .json(&update.trainer)
            .map_err(ApiGateway::internal)?;

        self.gateway.submit(request, &UPDATE_TRAINER).await?;
        self.gateway.emit(EntityMutated::new(
            EntityKind::Trainer,
            MutationKind::Updated,
            update.trainer.email,
        ));
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// `GET trainer/details?email=`
    pub async fn find_trainer_by_email(
        &self,
        ctx: &SessionContext,
        email: &str,
    ) -> AppResult<Trainer> {
        let request = ApiRequest::get("trainer/details").query("email", email);
        self.gateway.fetch_one(ctx, request).await
    }

    pub async fn find_active_trainers(
        &self,
        ctx: &SessionContext,
        page: PageRequest,
    ) -> Page<Trainer> {
        self.search_trainers(ctx, "trainers", StatusFilter::Active.as_str(), page)
            .await
    }

    pub async fn find_inactive_trainers(
        &self,
        ctx: &SessionContext,
        page: PageRequest,
    ) -> Page<Trainer> {
        self.search_trainers(ctx, "trainers", StatusFilter::Inactive.as_str(), page)
            .await
    }

    /// `GET user/viewAllTrainers?searchParam=&searchValue=&page=&limit=`
    pub async fn search_trainers(
        &self,
        ctx: &SessionContext,
        search_param: &str,
        search_value: &str,
        page: PageRequest,
    ) -> Page<Trainer> {
        let request = ApiRequest::get("user/viewAllTrainers")
            .query("searchParam", search_param)
            .query("searchValue", search_value)
            .query("page", page.page)
            .query("limit", page.limit);

        let what = format!("trainers by {}", search_param);
        if UNIQUE_KEYS.contains(&search_param) {
            self.gateway.fetch_single_as_page(ctx, request, &what).await
        } else {
            self.gateway.fetch_page(ctx, request, &what).await
        }
    }

    /// Active trainers offering a membership, for the member form's picker.
    ///
    /// `GET user/getAllActiveTrainerByMembershipId?membershipName=`
    pub async fn find_active_trainers_by_membership(
        &self,
        ctx: &SessionContext,
        membership_name: &str,
    ) -> Vec<Trainer> {
        let request = ApiRequest::get("user/getAllActiveTrainerByMembershipId")
            .query("membershipName", membership_name);
        self.gateway
            .fetch_list(ctx, request, "active trainers by membership name")
            .await
    }

    /// Members registered with a trainer.
    ///
    /// `GET trainer/getAllRegisteredMembers?trainerEmail=&page=&limit=`
    pub async fn find_registered_members(
        &self,
        ctx: &SessionContext,
        trainer_email: &str,
        page: PageRequest,
    ) -> Page<Member> {
        let request = ApiRequest::get("trainer/getAllRegisteredMembers")
            .query("trainerEmail", trainer_email)
            .query("page", page.page)
            .query("limit", page.limit);
        self.gateway
            .fetch_page(ctx, request, "registered members")
            .await
    }
}
