// src/application/state.rs

use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::crypto::CredentialCodec;
use crate::db::create_connection_pool;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{ApiTransport, GymApiClient};
use crate::services::{
    AdminService, ApiGateway, AuthService, DeletionService, MemberService, MembershipService,
    TrainerService,
};
use crate::session::{SessionStorage, SessionStore, SqliteSessionStorage};

use super::SessionContext;

/// Everything a presentation shell needs, wired once at startup.
/// All fields are Arc-wrapped for sharing across views and tasks.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session: Arc<SessionStore>,
    pub auth_service: Arc<AuthService>,
    pub admin_service: Arc<AdminService>,
    pub member_service: Arc<MemberService>,
    pub trainer_service: Arc<TrainerService>,
    pub membership_service: Arc<MembershipService>,
    pub deletion_service: Arc<DeletionService>,
}

impl AppState {
    /// Production wiring: SQLite session storage and the reqwest client.
    pub fn bootstrap(config: &ConsoleConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let codec = Arc::new(CredentialCodec::new(&config.secret_key));
        let pool = Arc::new(create_connection_pool(&config.session_db)?);

        // 2. ADAPTERS
        let storage: Arc<dyn SessionStorage> = Arc::new(SqliteSessionStorage::new(pool)?);
        let transport: Arc<dyn ApiTransport> = Arc::new(GymApiClient::new(
            config.backend_url.clone(),
            config.request_timeout,
        )?);

        log::info!("Console wired against {}", config.backend_url);
        Self::with_parts(transport, storage, codec, event_bus)
    }

    /// Wiring from explicit parts, for embedding shells and tests.
    pub fn with_parts(
        transport: Arc<dyn ApiTransport>,
        storage: Arc<dyn SessionStorage>,
        codec: Arc<CredentialCodec>,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        let session = Arc::new(SessionStore::open(storage, codec.clone(), event_bus.clone())?);
        let gateway = Arc::new(ApiGateway::new(transport, codec, event_bus.clone()));

        Ok(Self {
            event_bus,
            session,
            auth_service: Arc::new(AuthService::new(gateway.clone())),
            admin_service: Arc::new(AdminService::new(gateway.clone())),
            member_service: Arc::new(MemberService::new(gateway.clone())),
            trainer_service: Arc::new(TrainerService::new(gateway.clone())),
            membership_service: Arc::new(MembershipService::new(gateway.clone())),
            deletion_service: Arc::new(DeletionService::new(gateway)),
        })
    }

    /// Context for the next action or query call.
    pub fn context(&self) -> SessionContext {
        self.session.context()
    }
}
