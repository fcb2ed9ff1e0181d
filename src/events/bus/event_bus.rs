// events/bus/event_bus.rs
//
// In-process, synchronous publish/subscribe for session changes and backend
// mutations.
//
// GUARANTEES:
// 1. A handler has run before `emit` returns
// 2. Handlers of one event type run in subscription order
// 3. A panicking handler does not stop the others
// 4. Handlers may subscribe, unsubscribe or emit from inside a handler

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Oldest entries are dropped past this size.
const EVENT_LOG_CAPACITY: usize = 256;

/// Handle returned by `subscribe`, used to stop listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Lets the session store and the action services announce what happened
/// without depending on whoever listens (a table refreshing after a
/// mutation, a shell returning to the login screen after logout).
///
/// Clones share subscribers and log.
#[derive(Clone)]
pub struct EventBus {
    subscribers: Arc<RwLock<HashMap<TypeId, Vec<(SubscriptionId, Handler)>>>>,
    recent: Arc<RwLock<VecDeque<EventLogEntry>>>,
    next_id: Arc<AtomicU64>,
}

/// One emission, as kept in the bounded debug log.
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            recent: Arc::new(RwLock::new(VecDeque::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Registers `handler` for events of type `E`.
    ///
    /// ```ignore
    /// let id = bus.subscribe::<EntityMutated, _>(|event| refresh(event.entity));
    /// // when the view closes
    /// bus.unsubscribe(id);
    /// ```
    pub fn subscribe<E, F>(&self, handler: F) -> SubscriptionId
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let handler: Handler = Arc::new(move |payload: &dyn Any| match payload.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => log::error!("Event payload is not a {}", std::any::type_name::<E>()),
        });

        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push((id, handler));
        id
    }

    /// Removes a handler. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        for handlers in subscribers.values_mut() {
            if let Some(pos) = handlers.iter().position(|(existing, _)| *existing == id) {
                handlers.remove(pos);
                return true;
            }
        }
        false
    }

    /// Runs every handler registered for `E`, then returns.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        // Snapshot so handlers run without the lock held.
        let handlers: Vec<Handler> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map(|handlers| handlers.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();

        log::debug!(
            "[EVENT] {} ({}) -> {} handler(s)",
            event.event_type(),
            event.event_id(),
            handlers.len()
        );
        self.record(EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: handlers.len(),
        });

        for (position, handler) in handlers.iter().enumerate() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any)
            }));
            if outcome.is_err() {
                log::error!(
                    "Handler #{} for {} panicked",
                    position,
                    event.event_type()
                );
            }
        }
    }

    fn record(&self, entry: EventLogEntry) {
        let mut recent = self.recent.write().unwrap_or_else(PoisonError::into_inner);
        if recent.len() == EVENT_LOG_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(entry);
    }

    /// Latest emissions, oldest first.
    pub fn recent_events(&self) -> Vec<EventLogEntry> {
        self.recent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_recent_events(&self) {
        self.recent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
