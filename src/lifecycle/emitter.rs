// src/lifecycle/emitter.rs
//
// Lifecycle Emitter
//
// RULES:
// - Processing is always the first state
// - The wrapped call runs exactly once, lazily, on the second poll
// - Every sequence ends with Idle, terminal state first
// - Nothing escapes: errors and panics become states

use std::future::Future;
use std::panic::AssertUnwindSafe;

use async_stream::stream;
use futures_util::FutureExt;

use crate::error::{AppResult, ErrorClass};
use crate::lifecycle::{LifecycleState, StateStream};

/// Status reserved for "internal server error"
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Outcome of a remote call that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    /// Non-success status with the raw response body
    Failure { status: u16, body: String },
}

impl<T> ApiResponse<T> {
    pub fn failure(status: u16, body: impl Into<String>) -> Self {
        ApiResponse::Failure {
            status,
            body: body.into(),
        }
    }
}

/// Classifies a non-success status
pub fn failure_class(status: u16) -> ErrorClass {
    if status == INTERNAL_SERVER_ERROR {
        ErrorClass::ServerFault
    } else {
        ErrorClass::ApplicationError
    }
}

/// Wraps a remote call into `Processing -> terminal -> Idle`.
pub fn perform_call<T, F, Fut>(call: F) -> StateStream<T>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = AppResult<ApiResponse<T>>> + Send + 'static,
{
    Box::pin(stream! {
        yield LifecycleState::Processing;

        let outcome = AssertUnwindSafe(call()).catch_unwind().await;
        let terminal = match outcome {
            Ok(Ok(response)) => response_to_state(response),
            Ok(Err(error)) => {
                log::warn!("Remote call failed before producing a response: {}", error);
                LifecycleState::from_app_error(&error)
            }
            Err(_) => {
                log::error!("Remote call panicked; reporting as server error");
                LifecycleState::ServerError
            }
        };

        yield terminal;
        yield LifecycleState::Idle;
    })
}

fn response_to_state<T>(response: ApiResponse<T>) -> LifecycleState<T> {
    match response {
        ApiResponse::Success(payload) => LifecycleState::Success(payload),
        ApiResponse::Failure { status, body } => match failure_class(status) {
            ErrorClass::ServerFault => LifecycleState::ServerError,
            _ => {
                log::debug!("Remote call returned status {}", status);
                LifecycleState::Error {
                    message: body,
                    code: Some(status),
                }
            }
        },
    }
}
