//! Build errors for the state machine builder.

use crate::error::MachineError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states registered. Call .state(name, state) before .build()")]
    NoStates,

    #[error("No transitions declared. Add at least one transition")]
    NoTransitions,

    #[error(transparent)]
    Machine(#[from] MachineError),
}
