//! Errors raised by the state machine engine.

use thiserror::Error;

/// Errors that can occur while configuring or driving a state machine.
///
/// Every failure is surfaced to the immediate caller; the machine is left in
/// the last valid state. The one exception is [`MachineError::ValidationRejected`]:
/// the outgoing state's `before_leave` hook has already run by then and its
/// effects are not rolled back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Starting state not set. Call set_starting_state(name) first")]
    NotReady,

    #[error("State '{name}' is not registered")]
    UnregisteredState { name: String },

    #[error("State '{name}' is already registered")]
    DuplicateState { name: String },

    #[error("No transition has been registered for action {action}")]
    NoTransitionRegisteredForAction { action: String },

    #[error("State '{state}' has no registered transition for action {action}")]
    NoTransitionForCurrentState { action: String, state: String },

    #[error("Transition on {action} from '{from}' targets unregistered state '{to}'")]
    TargetStateUnregistered {
        action: String,
        from: String,
        to: String,
    },

    #[error("Data from '{from}' rejected by validator of '{to}'")]
    ValidationRejected { from: String, to: String },

    #[error("Current state '{description}' has no registry entry")]
    CurrentStateUnregistered { description: String },
}

impl MachineError {
    /// True for every error caused by a name missing from the registry.
    pub fn is_unregistered_state(&self) -> bool {
        matches!(
            self,
            Self::UnregisteredState { .. } | Self::TargetStateUnregistered { .. }
        )
    }
}
