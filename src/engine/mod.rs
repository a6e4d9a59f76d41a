//! State machine execution.
//!
//! This module wires the registry and transition table together and runs
//! the action-handling algorithm:
//!
//! 1. Look up the action's declarations and the current state's name
//! 2. Pick the first declaration for that name
//! 3. Run `before_leave`, validate the captured data on the target
//! 4. Copy the data over, switch the current handle, run `after_enter`
//!
//! The machine is single-threaded and synchronous. Sharing one instance
//! across threads requires an external lock.

mod machine;

pub use machine::{StateMachine, Status};
