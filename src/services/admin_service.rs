// src/services/admin_service.rs

use std::sync::Arc;

use crate::application::SessionContext;
use crate::domain::{validate_admin_update, Admin, AdminForm, AdminUpdate, FieldErrors};
use crate::error::AppResult;
use crate::events::{EntityKind, EntityMutated, MutationKind};
use crate::integrations::ApiRequest;
use crate::services::form_state::FormState;
use crate::services::gateway::{ApiGateway, Submission};

const UPDATE_ADMIN: Submission = Submission {
    expected_status: 200,
    rejected: "Update failed. Please try again.",
    errored: "Error occurred during update. Please try again.",
};

pub struct AdminService {
    gateway: Arc<ApiGateway>,
}

impl AdminService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `PUT user?adminEmail=<original>` with the edited admin as body.
    pub async fn update_admin(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        form: &AdminForm,
    ) -> FormState {
        let result = match validate_admin_update(form) {
            Ok(update) => self.submit_update(ctx, update).await,
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    async fn submit_update(&self, ctx: &SessionContext, update: AdminUpdate) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = ApiRequest::put("user")
            .query("adminEmail", &update.original_email)
            .bearer(token)
            .json(&update.admin)
            .map_err(ApiGateway::internal)?;

        self.gateway.submit(request, &UPDATE_ADMIN).await?;
        self.gateway.emit(EntityMutated::new(
            EntityKind::Admin,
            MutationKind::Updated,
            update.admin.email,
        ));
        Ok(())
    }

    /// `GET user/getAdminDetails?email=`
    pub async fn find_admin_by_email(&self, ctx: &SessionContext, email: &str) -> AppResult<Admin> {
        let request = ApiRequest::get("user/getAdminDetails").query("email", email);
        self.gateway.fetch_one(ctx, request).await
    }
}
