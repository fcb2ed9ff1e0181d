// src/events/bus/mod.rs

mod event_bus;

pub use event_bus::{EventBus, EventLogEntry, SubscriptionId};
