// src/services/deletion_service.rs
//
// Removal of members, trainers and memberships.

use std::sync::Arc;

use crate::application::SessionContext;
use crate::domain::{validate_delete, Deletion, DeleteRole, FieldErrors};
use crate::events::{EntityKind, EntityMutated, MutationKind};
use crate::integrations::ApiRequest;
use crate::services::form_state::FormState;
use crate::services::gateway::{ApiGateway, Submission};

const DELETE: Submission = Submission {
    expected_status: 200,
    rejected: "Failed to delete user. Please try again.",
    errored: "Error occurred during deletion. Please try again.",
};

pub struct DeletionService {
    gateway: Arc<ApiGateway>,
}

impl DeletionService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `DELETE user/deleteUsers?deleteRole=&deleteValue=`
    ///
    /// `role` is `member`, `trainer` or `membership`; `value` is the email
    /// (members, trainers) or the name (memberships).
    pub async fn delete(
        &self,
        ctx: &SessionContext,
        previous: &FormState,
        role: &str,
        value: &str,
    ) -> FormState {
        let result = match validate_delete(role, value) {
            Ok(deletion) => self.submit(ctx, deletion).await,
            Err(errors) => Err(errors),
        };
        FormState::from_result(previous, result)
    }

    async fn submit(&self, ctx: &SessionContext, deletion: Deletion) -> Result<(), FieldErrors> {
        let token = self.gateway.authorize(ctx)?;
        let request = ApiRequest::delete("user/deleteUsers")
            .query("deleteRole", deletion.role.as_str())
            .query("deleteValue", &deletion.value)
            .bearer(token);

        self.gateway.submit(request, &DELETE).await?;

        let entity = match deletion.role {
            DeleteRole::Member => EntityKind::Member,
            DeleteRole::Trainer => EntityKind::Trainer,
            DeleteRole::Membership => EntityKind::Membership,
        };
        self.gateway
            .emit(EntityMutated::new(entity, MutationKind::Deleted, deletion.value));
        Ok(())
    }
}
