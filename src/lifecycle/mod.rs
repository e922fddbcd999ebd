// src/lifecycle/mod.rs
//
// Request lifecycle
//
// Every remote call in the crate is observed through the same closed state
// type. Repositories wrap calls with `perform_call`; services only ever
// transform the success payload and let every other state through.

pub mod emitter;
pub mod state;

pub use emitter::{failure_class, perform_call, ApiResponse, INTERNAL_SERVER_ERROR};
pub use state::{LifecycleState, StateStream};
