// events/types.rs
//
// Domain events emitted by the console core.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

/// Which session field changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionField {
    Name,
    Email,
    Token,
}

/// Emitted after a session field is written (and persisted).
///
/// The value itself is not carried: tokens must not leak into event logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub field: SessionField,
}

impl SessionChanged {
    pub fn new(field: SessionField) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            field,
        }
    }
}

impl DomainEvent for SessionChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SessionChanged" }
}

/// Emitted when the session is wiped (logout or forced re-login).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl SessionCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for SessionCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for SessionCleared {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SessionCleared" }
}

// ============================================================================
// BACKEND MUTATION EVENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Admin,
    Member,
    Trainer,
    Membership,
    Registration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

/// Emitted after the backend confirmed a create, update or delete.
///
/// Listing views subscribe to this to refresh themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMutated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entity: EntityKind,
    pub operation: MutationKind,
    /// Email or name identifying the affected record
    pub key: String,
}

impl EntityMutated {
    pub fn new(entity: EntityKind, operation: MutationKind, key: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entity,
            operation,
            key: key.into(),
        }
    }
}

impl DomainEvent for EntityMutated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "EntityMutated" }
}
