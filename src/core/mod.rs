//! Core state machine types.
//!
//! This module contains the building blocks the engine drives:
//! - State definitions via the `State` trait
//! - Transition records and the append-only transition table
//! - The registry that owns every state instance
//!
//! Nothing in here decides when a transition happens; that is the job of
//! [`crate::engine::StateMachine`].

mod registry;
mod state;
mod table;
mod transition;

pub use registry::{StateId, StateRegistry};
pub use state::{Action, DataPack, State};
pub use table::TransitionTable;
pub use transition::{Target, TransitionRecord};
