// src/integrations/mod.rs
//
// External Integrations Module
//
// The gym backend is the only collaborator: every action and query goes
// through the ApiTransport port so services never touch HTTP directly.

pub mod gym_api;

pub use gym_api::{
    ApiRequest, ApiResponse, ApiTransport, GymApiClient, HttpMethod, PageEnvelope,
    ResponseEnvelope,
};
