//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Action, DataPack, State, Target};
use crate::engine::StateMachine;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<A: Action, D: DataPack> {
    config: MachineConfig,
    states: Vec<(String, Box<dyn State<D>>)>,
    transitions: Vec<(A, String, Target)>,
    starting: Option<String>,
}

impl<A: Action, D: DataPack> StateMachineBuilder<A, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
            states: Vec::new(),
            transitions: Vec::new(),
            starting: None,
        }
    }

    /// Replace the machine configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a state under `name`.
    pub fn state<S>(mut self, name: impl Into<String>, state: S) -> Self
    where
        S: State<D> + 'static,
    {
        self.states.push((name.into(), Box::new(state)));
        self
    }

    /// Register the state produced by `factory` under `name`.
    pub fn state_with<S, F>(self, name: impl Into<String>, factory: F) -> Self
    where
        S: State<D> + 'static,
        F: FnOnce() -> S,
    {
        self.state(name, factory())
    }

    /// Register a default-constructed `S` under `name`.
    pub fn default_state<S>(self, name: impl Into<String>) -> Self
    where
        S: State<D> + Default + 'static,
    {
        self.state(name, S::default())
    }

    /// Declare a transition.
    pub fn transition(mut self, action: A, from: impl Into<String>, to: impl Into<Target>) -> Self {
        self.transitions.push((action, from.into(), to.into()));
        self
    }

    /// Declare that `action` has no effect from `from`.
    pub fn no_transition(self, action: A, from: impl Into<String>) -> Self {
        self.transition(action, from, Target::No)
    }

    /// Set the starting state (optional).
    pub fn starting(mut self, name: impl Into<String>) -> Self {
        self.starting = Some(name.into());
        self
    }

    /// Build the state machine.
    ///
    /// Without a starting state the machine is returned uninitialized.
    pub fn build(self) -> Result<StateMachine<A, D>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine = StateMachine::with_config(self.config);
        for (name, state) in self.states {
            machine.register_boxed(name, state)?;
        }
        for (action, from, to) in self.transitions {
            machine.add_transition(action, from, to);
        }
        if let Some(name) = self.starting {
            machine.set_starting_state(&name)?;
        }

        Ok(machine)
    }
}

impl<A: Action, D: DataPack> Default for StateMachineBuilder<A, D> {
    fn default() -> Self {
        Self::new()
    }
}
