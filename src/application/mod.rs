// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the services; the binary only talks to this layer
// - Drives pipelines and turns lifecycle states into view signals
// - Translates domain values into DTOs for output

pub mod dto;
pub mod error_handling;
pub mod session;
pub mod state;
pub mod view_state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use session::{CatalogSession, SessionConfig};
pub use state::AppState;
pub use view_state::ViewSignal;
