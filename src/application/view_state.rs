// src/application/view_state.rs
//
// Lifecycle states as UI signals
//
// One signal per state at most: loading is shown on Processing and hidden on
// Idle, and each failed call produces exactly one error signal.

use serde::{Deserialize, Serialize};

use crate::lifecycle::LifecycleState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum ViewSignal {
    ShowLoading,
    HideLoading,
    /// Recoverable failure, shown as a toast
    ShowError { message: String, code: Option<u16> },
    /// Transport failure or server fault
    ShowNetworkError,
}

impl ViewSignal {
    /// `None` for `Success`; the payload goes to the result channel instead.
    pub fn from_state<T>(state: &LifecycleState<T>) -> Option<Self> {
        match state {
            LifecycleState::Processing => Some(ViewSignal::ShowLoading),
            LifecycleState::Idle => Some(ViewSignal::HideLoading),
            LifecycleState::Error { message, code } => Some(ViewSignal::ShowError {
                message: message.clone(),
                code: *code,
            }),
            LifecycleState::ServerError => Some(ViewSignal::ShowNetworkError),
            LifecycleState::Success(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_per_state() {
        assert_eq!(
            ViewSignal::from_state(&LifecycleState::<()>::Processing),
            Some(ViewSignal::ShowLoading)
        );
        assert_eq!(
            ViewSignal::from_state(&LifecycleState::<()>::Idle),
            Some(ViewSignal::HideLoading)
        );
        assert_eq!(
            ViewSignal::from_state(&LifecycleState::<()>::ServerError),
            Some(ViewSignal::ShowNetworkError)
        );
        assert_eq!(ViewSignal::from_state(&LifecycleState::Success(1)), None);
    }

    #[test]
    fn test_error_keeps_message_and_code() {
        let state: LifecycleState<()> = LifecycleState::error("Invalid API key", Some(401));
        assert_eq!(
            ViewSignal::from_state(&state),
            Some(ViewSignal::ShowError {
                message: "Invalid API key".to_string(),
                code: Some(401)
            })
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ViewSignal::ShowNetworkError).unwrap();
        assert_eq!(json, serde_json::json!({ "signal": "show_network_error" }));
    }
}
