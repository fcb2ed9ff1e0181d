// src/services/test_support.rs
//
// Shared fixtures for the service tests.

use std::sync::{Arc, RwLock};

use crate::application::SessionContext;
use crate::crypto::CredentialCodec;
use crate::events::{EntityMutated, EventBus};
use crate::integrations::gym_api::MockApiTransport;
use crate::services::gateway::ApiGateway;

pub const SECRET: &str = "test-secret";
pub const TOKEN: &str = "header.payload.signature";

pub fn codec() -> Arc<CredentialCodec> {
    Arc::new(CredentialCodec::new(SECRET))
}

/// Gateway over a mock transport, plus a log of emitted mutations.
pub fn gateway(transport: MockApiTransport) -> (Arc<ApiGateway>, Arc<RwLock<Vec<EntityMutated>>>) {
    let bus = Arc::new(EventBus::new());
    let mutations = Arc::new(RwLock::new(Vec::new()));
    let sink = Arc::clone(&mutations);
    bus.subscribe::<EntityMutated, _>(move |event| sink.write().unwrap().push(event.clone()));

    let gateway = Arc::new(ApiGateway::new(Arc::new(transport), codec(), bus));
    (gateway, mutations)
}

/// A signed-in admin whose token decodes to `TOKEN`.
pub fn signed_in() -> SessionContext {
    SessionContext::new("Admin", "admin@gym.com", codec().encode(TOKEN))
}

/// A context whose token was encoded with another secret.
pub fn foreign_session() -> SessionContext {
    let other = CredentialCodec::new("some-other-secret");
    SessionContext::new("Admin", "admin@gym.com", other.encode(TOKEN))
}

/// Transport that fails the test if anything is sent.
pub fn silent_transport() -> MockApiTransport {
    let mut transport = MockApiTransport::new();
    transport.expect_send().never();
    transport
}
