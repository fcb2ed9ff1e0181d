// src/lib.rs
// Gym Console - administrative console core for a gym-management backend
//
// Architecture:
// - Domain-centric: records and validators live in domains
// - Explicit session: every call receives a SessionContext, nothing global
// - Event-driven: session changes and backend mutations go through the bus
// - Infallible surface: actions return FormState, queries return empty results
// - Application Layer: wiring and session flows for a presentation shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod crypto;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod session;

// ============================================================================
// BACKEND ACCESS
// ============================================================================

pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_add_member,
    validate_add_membership,
    validate_add_trainer,
    // Admin
    validate_admin_update,
    validate_delete,
    validate_login,
    validate_otp_request,
    // Auth
    validate_register,
    validate_update_member,
    validate_update_membership,
    validate_update_trainer,
    AccountStatus,
    Admin,
    AdminForm,
    DeleteRole,
    FieldErrors,
    Gender,
    LoginForm,
    // Member
    Member,
    MemberForm,
    MemberUpdateForm,
    // Membership
    Membership,
    MembershipForm,
    MembershipUpdateForm,
    RegisterForm,
    Role,
    // Trainer
    Trainer,
    TrainerForm,
    TrainerUpdateForm,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration & Crypto
// ============================================================================

pub use config::ConsoleConfig;
pub use crypto::CredentialCodec;

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EntityKind, EntityMutated, EventBus, EventLogEntry,
    MutationKind, SessionChanged, SessionCleared, SessionField, SubscriptionId,
};

// ============================================================================
// PUBLIC API - Session
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use session::{
    session_impact, MemorySessionStorage, Session, SessionImpact, SessionStorage, SessionStore,
    SqliteSessionStorage,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AdminService, AuthService, DeletionService, FormState, LoginOutcome, MemberService,
    MembershipService, Page, PageRequest, StatusFilter, TrainerService, INTERNAL_ERROR,
    INVALID_SESSION,
};

// ============================================================================
// PUBLIC API - Integrations & Application Layer
// ============================================================================

pub use integrations::{ApiRequest, ApiResponse, ApiTransport, GymApiClient, HttpMethod};

pub use application::{
    AppState, ErrorResponse, ErrorType, HomeProfile, SessionContext, ToErrorResponse, ViewScope,
};
