// src/integrations/gym_api/mod.rs

pub mod client;
pub mod envelope;
pub mod transport;

pub use client::GymApiClient;
pub use envelope::{PageEnvelope, ResponseEnvelope};
pub use transport::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};

#[cfg(test)]
pub use transport::MockApiTransport;
