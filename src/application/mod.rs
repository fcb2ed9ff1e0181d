// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between a presentation shell and the services
// - Wires infrastructure once (AppState)
// - Owns the flows that read or write the session
// - Translates AppError into UI-friendly responses

pub mod context;
pub mod error_handling;
pub mod scope;
pub mod session_flow;
pub mod state;

pub use context::SessionContext;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use scope::ViewScope;
pub use session_flow::HomeProfile;
pub use state::AppState;
