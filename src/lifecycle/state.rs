// src/lifecycle/state.rs

use std::future::Future;

use futures_util::stream::BoxStream;

use crate::error::{AppError, ErrorClass};

/// Progress of a single asynchronous remote operation.
///
/// Exactly one variant is active at a time. A pipeline invocation produces an
/// ordered sequence of these; none of them is ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState<T> {
    /// Nothing in flight; also closes every finished sequence
    Idle,
    /// The operation has been started
    Processing,
    Success(T),
    /// Recoverable failure with a message fit for display
    Error { message: String, code: Option<u16> },
    /// Transport failure or internal server fault
    ServerError,
}

/// Boxed, sendable sequence of lifecycle states
pub type StateStream<T> = BoxStream<'static, LifecycleState<T>>;

impl<T> LifecycleState<T> {
    pub fn error(message: impl Into<String>, code: Option<u16>) -> Self {
        LifecycleState::Error {
            message: message.into(),
            code,
        }
    }

    /// Terminal state for a failure that happened on our side of the call.
    pub fn from_app_error(error: &AppError) -> Self {
        match error.class() {
            ErrorClass::TransportFailure | ErrorClass::ServerFault => LifecycleState::ServerError,
            ErrorClass::ApplicationError | ErrorClass::StoreFailure => {
                LifecycleState::error(error.to_string(), None)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LifecycleState::Success(_))
    }

    /// Everything except `Processing` ends a loading indicator
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LifecycleState::Processing)
    }

    pub fn success(self) -> Option<T> {
        self.into_success::<T>().ok()
    }

    /// Splits off the payload; every other variant is re-typed unchanged.
    ///
    /// This is the one place that matches over all variants. Every layer that
    /// transforms a success payload goes through it.
    pub fn into_success<U>(self) -> Result<T, LifecycleState<U>> {
        match self {
            LifecycleState::Success(payload) => Ok(payload),
            LifecycleState::Idle => Err(LifecycleState::Idle),
            LifecycleState::Processing => Err(LifecycleState::Processing),
            LifecycleState::Error { message, code } => Err(LifecycleState::Error { message, code }),
            LifecycleState::ServerError => Err(LifecycleState::ServerError),
        }
    }

    /// Replaces a success with whatever `f` decides; other states pass through.
    pub fn map_success<U, F>(self, f: F) -> LifecycleState<U>
    where
        F: FnOnce(T) -> LifecycleState<U>,
    {
        match self.into_success() {
            Ok(payload) => f(payload),
            Err(other) => other,
        }
    }

    pub fn map<U, F>(self, f: F) -> LifecycleState<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map_success(|payload| LifecycleState::Success(f(payload)))
    }

    /// Async flavour of [`LifecycleState::map_success`].
    pub async fn then_success<U, F, Fut>(self, f: F) -> LifecycleState<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = LifecycleState<U>>,
    {
        match self.into_success() {
            Ok(payload) => f(payload).await,
            Err(other) => other,
        }
    }

    /// Variant name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "Idle",
            LifecycleState::Processing => "Processing",
            LifecycleState::Success(_) => "Success",
            LifecycleState::Error { .. } => "Error",
            LifecycleState::ServerError => "ServerError",
        }
    }
}
