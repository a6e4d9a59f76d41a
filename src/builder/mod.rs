//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the `state_data!` macro for
//! defining states and machines with minimal boilerplate.
//!
//! # Example
//!
//! ```
//! use handover::builder::StateMachineBuilder;
//! use handover::core::State;
//! use handover::state_data;
//!
//! #[derive(Clone, Default, Debug)]
//! struct Door {
//!     opened: u32,
//! }
//!
//! #[derive(Default)]
//! struct Closed {
//!     data: Door,
//! }
//!
//! impl State<Door> for Closed {
//!     state_data!(data: Door);
//!     fn describe(&self) -> &str { "CLOSED" }
//! }
//!
//! #[derive(Default)]
//! struct Open {
//!     data: Door,
//! }
//!
//! impl State<Door> for Open {
//!     state_data!(data: Door);
//!     fn describe(&self) -> &str { "OPEN" }
//!     fn after_enter(&mut self) { self.data.opened += 1; }
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Push { Button }
//!
//! let mut door = StateMachineBuilder::<Push, Door>::new()
//!     .default_state::<Closed>("closed")
//!     .default_state::<Open>("open")
//!     .transition(Push::Button, "closed", "open")
//!     .transition(Push::Button, "open", "closed")
//!     .starting("closed")
//!     .build()
//!     .unwrap();
//!
//! door.handle_action(&Push::Button).unwrap();
//! door.handle_action(&Push::Button).unwrap();
//! door.handle_action(&Push::Button).unwrap();
//! assert_eq!(door.get_current_state().unwrap().get_data().opened, 2);
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
