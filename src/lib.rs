//! Handover: a finite state machine engine with validated data packs
//!
//! A machine is a set of named states, a caller-defined action type and a
//! transition table mapping `(action, current state)` to the next state.
//! Every state carries its own copy of a shared "data pack"; on each
//! transition the outgoing state's data is handed to the incoming state,
//! which may veto it.
//!
//! # Core Concepts
//!
//! - **State**: Caller-defined types implementing the `State` trait, with
//!   `before_leave`/`after_enter` hooks and a `validate` predicate
//! - **Transition table**: Explicit declarations, including explicit no-ops
//!   via `Target::No`; an undeclared combination is an error
//! - **Registry**: Owns every state; the machine only holds a handle to the
//!   current one
//!
//! Handling is synchronous and single-threaded. Wrap the machine in a lock
//! to share it between threads.
//!
//! # Example
//!
//! ```rust
//! use handover::core::{State, Target};
//! use handover::engine::StateMachine;
//! use handover::state_data;
//!
//! #[derive(Clone, Default, Debug)]
//! struct Washing {
//!     water_in_drum: bool,
//! }
//!
//! #[derive(Default)]
//! struct Idle {
//!     data: Washing,
//! }
//!
//! impl State<Washing> for Idle {
//!     state_data!(data: Washing);
//!
//!     fn describe(&self) -> &str {
//!         "IDLE"
//!     }
//!
//!     fn validate(&self, candidate: &Washing) -> bool {
//!         !candidate.water_in_drum
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Wash {
//!     data: Washing,
//! }
//!
//! impl State<Washing> for Wash {
//!     state_data!(data: Washing);
//!
//!     fn describe(&self) -> &str {
//!         "WASHING"
//!     }
//!
//!     fn before_leave(&mut self) {
//!         self.data.water_in_drum = false;
//!     }
//!
//!     fn after_enter(&mut self) {
//!         self.data.water_in_drum = true;
//!     }
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Button {
//!     Wash,
//!     Finish,
//! }
//!
//! let mut machine = StateMachine::<Button, Washing>::new();
//! machine.register_default::<Idle>("idle").unwrap();
//! machine.register_default::<Wash>("washing").unwrap();
//! machine.add_transition(Button::Wash, "idle", "washing");
//! machine.add_transition(Button::Wash, "washing", Target::No);
//! machine.add_transition(Button::Finish, "idle", Target::No);
//! machine.add_transition(Button::Finish, "washing", "idle");
//! machine.set_starting_state("idle").unwrap();
//!
//! assert_eq!(machine.handle_action(&Button::Wash), Ok(true));
//! assert!(machine.get_current_state().unwrap().get_data().water_in_drum);
//! assert_eq!(machine.handle_action(&Button::Finish), Ok(true));
//! assert_eq!(machine.current_state_name(), Ok("idle"));
//! ```

pub mod audit;
pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::config::{DuplicatePolicy, MachineConfig};
pub use crate::core::{Action, DataPack, State, StateId, Target};
pub use crate::engine::{StateMachine, Status};
pub use crate::error::MachineError;
pub use crate::snapshot::{Snapshot, SnapshotError};
