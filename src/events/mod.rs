// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported.

pub mod bus;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Backend mutations
    EntityKind,
    EntityMutated,
    MutationKind,

    // Session
    SessionChanged,
    SessionCleared,
    SessionField,
};

pub use bus::{EventBus, EventLogEntry, SubscriptionId};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
