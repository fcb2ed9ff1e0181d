// src/services/member_service.rs

use std::sync::Arc;

use crate::application::SessionContext;
use crate::domain::{
    validate_add_member, validate_update_member, FieldErrors, Member, MemberForm, MemberUpdate,
    MemberUpdateForm, NewMember,
};
use crate::error::AppResult;
use crate::events::{EntityKind, EntityMutated, MutationKind};
use crate::integrations::ApiRequest;
use crate::services::form_state::FormState;
use crate::services::gateway::{ApiGateway, Submission};
use crate::services::query::{Page, PageRequest, StatusFilter};

const ADD_MEMBER: Submission = Submission {
    expected_status: 201,
    rejected: "Failed to add member. Please try again.",
    errored: "Error occurred during adding member. Please try again.",
};

const UPDATE_MEMBER: Submission = Submission {
    expected_status: 200,
    rejected: "Failed to update member. Please try again.",
    errored: "Error occurred during updating member. Please try again.",
};

/// Search parameters answered with a single member instead of a page.
const UNIQUE_KEYS: [&str; 2] = ["memberId", "email"];

pub struct MemberService {
    gateway: Arc<ApiGateway>,
}

impl MemberService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// `POST user/addMember?membershipName=&trainerId=`
    pub async fn add_member(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &MemberForm,
    ) -> FormState {
        let result = match validate_add_member(form) {
            Ok(draft) => self.submit_add(ctx, draft).await,
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    /// `PUT user/updateMember?memberEmail=<original>&membershipName=&trainerId=`
    pub async fn update_member(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &MemberUpdateForm,
    ) -> FormState {
        let result = match validate_update_member(form) {
            Ok(update) => self.submit_update(ctx, update).await,
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    async fn submit_add(&self, ctx: &SessionContext, draft: NewMember) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = ApiRequest::post("user/addMember")
            .query("membershipName", &draft.membership_name)
            .query("trainerId", draft.trainer_id)
            .bearer(token)
            .json(&draft.member)
            .map_err(ApiGateway::internal)?;

        self.gateway.submit(request, &ADD_MEMBER).await?;
        self.gateway.emit(EntityMutated::new(
            EntityKind::Member,
            MutationKind::Created,
            draft.member.email,
        ));
        Ok(())
    }

    async fn submit_update(
        &self,
        ctx: &SessionContext,
        update: MemberUpdate,
    ) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = ApiRequest::put("user/updateMember")
            .query("memberEmail", &update.original_email)
            .query("membershipName", &update.membership_name)
            .query("trainerId", update.trainer_id)
            .bearer(token)
            .json(&update.member)
            .map_err(ApiGateway::internal)?;

        self.gateway.submit(request, &UPDATE_MEMBER).await?;
        self.gateway.emit(EntityMutated::new(
            EntityKind::Member,
            MutationKind::Updated,
            update.member.email,
        ));
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// `GET member/details?email=`
    pub async fn find_member_by_email(
        &self,
        ctx: &SessionContext,
        email: &str,
    ) -> AppResult<Member> {
        let request = ApiRequest::get("member/details").query("email", email);
        self.gateway.fetch_one(ctx, request).await
    }

    pub async fn find_active_members(&self, ctx: &SessionContext, page: PageRequest) -> Page<Member> {
        self.find_by_status(ctx, StatusFilter::Active, page).await
    }

    pub async fn find_inactive_members(
        &self,
        ctx: &SessionContext,
        page: PageRequest,
    ) -> Page<Member> {
        self.find_by_status(ctx, StatusFilter::Inactive, page).await
    }

    async fn find_by_status(
        &self,
        ctx: &SessionContext,
        status: StatusFilter,
        page: PageRequest,
    ) -> Page<Member> {
        self.search_members(ctx, "members", status.as_str(), page).await
    }

    /// `GET user/viewAllMembers?searchParam=&searchValue=&page=&limit=`
    ///
    /// `memberId` and `email` searches yield at most one member.
    pub async fn search_members(
        &self,
        ctx: &SessionContext,
        search_param: &str,
        search_value: &str,
        page: PageRequest,
    ) -> Page<Member> {
        let request = ApiRequest::get("user/viewAllMembers")
            .query("searchParam", search_param)
            .query("searchValue", search_value)
            .query("page", page.page)
            .query("limit", page.limit);

        let what = format!("members by {}", search_param);
        if UNIQUE_KEYS.contains(&search_param) {
            self.gateway.fetch_single_as_page(ctx, request, &what).await
        } else {
            self.gateway.fetch_page(ctx, request, &what).await
        }
    }
}
