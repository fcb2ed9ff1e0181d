// src/services/membership_service.rs

use std::sync::Arc;

use crate::application::SessionContext;
use crate::domain::{
    validate_add_membership, validate_update_membership, FieldErrors, Membership,
    MembershipForm, MembershipUpdateForm,
};
use crate::events::{EntityKind, EntityMutated, MutationKind};
use crate::integrations::ApiRequest;
use crate::services::form_state::FormState;
use crate::services::gateway::{ApiGateway, Submission};
use crate::services::query::{Page, PageRequest, StatusFilter};

const ADD_MEMBERSHIP: Submission = Submission {
    expected_status: 201,
    rejected: "Failed to add membership. Please try again.",
    errored: "Error occurred during adding membership. Please try again.",
};

const UPDATE_MEMBERSHIP: Submission = Submission {
    expected_status: 200,
    rejected: "Failed to update membership. Please try again.",
    errored: "Error occurred during updating membership. Please try again.",
};

/// Memberships are unique by name.
const UNIQUE_KEYS: [&str; 1] = ["name"];

pub struct MembershipService {
    gateway: Arc<ApiGateway>,
}

impl MembershipService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `POST user/addMembership`
    pub async fn add_membership(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &MembershipForm,
    ) -> FormState {
        let result = match validate_add_membership(form) {
            Ok(membership) => {
                let request = ApiRequest::post("user/addMembership");
                self.submit(ctx, request, membership, &ADD_MEMBERSHIP, MutationKind::Created)
                    .await
            }
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    /// `PUT user/updateMembership`, the id travels in the body.
    pub async fn update_membership(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &MembershipUpdateForm,
    ) -> FormState {
        let result = match validate_update_membership(form) {
            Ok(membership) => {
                let request = ApiRequest::put("user/updateMembership");
                self.submit(ctx, request, membership, &UPDATE_MEMBERSHIP, MutationKind::Updated)
                    .await
            }
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    async fn submit(
        &self,
        ctx: &SessionContext,
        request: ApiRequest,
        membership: Membership,
        submission: &Submission,
        operation: MutationKind,
    ) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = request
            .bearer(token)
            .json(&membership)
            .map_err(ApiGateway::internal)?;

        self.gateway.submit(request, submission).await?;
        self.gateway.emit(EntityMutated::new(
            EntityKind::Membership,
            operation,
            membership.name,
        ));
        Ok(())
    }

    pub async fn find_active_memberships(
        &self,
        ctx: &SessionContext,
        page: PageRequest,
    ) -> Page<Membership> {
        self.search_memberships(ctx, "memberships", StatusFilter::Active.as_str(), page)
            .await
    }

    pub async fn find_inactive_memberships(
        &self,
        ctx: &SessionContext,
        page: PageRequest,
    ) -> Page<Membership> {
        self.search_memberships(ctx, "memberships", StatusFilter::Inactive.as_str(), page)
            .await
    }

    /// `GET user/viewAllMemberships?searchParam=&searchValue=&page=&limit=`
    pub async fn search_memberships(
        &self,
        ctx: &SessionContext,
        search_param: &str,
        search_value: &str,
        page: PageRequest,
    ) -> Page<Membership> {
        let request = ApiRequest::get("user/viewAllMemberships")
            .query("searchParam", search_param)
            .query("searchValue", search_value)
            .query("page", page.page)
            .query("limit", page.limit);

        let what = format!("memberships by {}", search_param);
        if UNIQUE_KEYS.contains(&search_param) {
            self.gateway.fetch_single_as_page(ctx, request, &what).await
        } else {
            self.gateway.fetch_page(ctx, request, &what).await
        }
    }

    /// Every active membership, unpaged, for form pickers.
    ///
    /// `GET user/getAllActiveMembershipsNoLimit`
    pub async fn find_all_active_memberships(&self, ctx: &SessionContext) -> Vec<Membership> {
        let request = ApiRequest::get("user/getAllActiveMembershipsNoLimit");
        self.gateway
            .fetch_list(ctx, request, "all active memberships")
            .await
    }
}
