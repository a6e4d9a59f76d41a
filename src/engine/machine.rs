//! State machine that drives registered states through declared transitions.

use crate::config::MachineConfig;
use crate::core::{Action, DataPack, State, StateId, StateRegistry, Target, TransitionTable};
use crate::error::MachineError;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Lifecycle of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No starting state set yet; actions and current-state queries fail.
    Uninitialized,

    /// A state is current and actions may be handled.
    Ready,
}

/// State machine over actions `A` and data pack `D`.
///
/// # Example
///
/// ```rust
/// use handover::core::{State, Target};
/// use handover::engine::StateMachine;
/// use handover::state_data;
///
/// #[derive(Clone, Default, Debug)]
/// struct Nothing;
///
/// #[derive(Default)]
/// struct Step {
///     data: Nothing,
/// }
///
/// impl State<Nothing> for Step {
///     state_data!(data: Nothing);
///
///     fn describe(&self) -> &str {
///         "Step"
///     }
/// }
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// enum Tick {
///     Next,
/// }
///
/// let mut machine = StateMachine::<Tick, Nothing>::new();
/// machine.register_default::<Step>("A").unwrap();
/// machine.register_default::<Step>("B").unwrap();
/// machine.add_transition(Tick::Next, "A", "B");
/// machine.add_transition(Tick::Next, "B", Target::No);
/// machine.set_starting_state("A").unwrap();
///
/// assert_eq!(machine.handle_action(&Tick::Next), Ok(true));
/// assert_eq!(machine.handle_action(&Tick::Next), Ok(false));
/// assert_eq!(machine.current_state_name(), Ok("B"));
/// ```
pub struct StateMachine<A: Action, D: DataPack> {
    config: MachineConfig,
    registry: StateRegistry<D>,
    table: TransitionTable<A>,
    current: Option<StateId>,
}

impl<A: Action, D: DataPack> StateMachine<A, D> {
    /// Create an empty, uninitialized machine with default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create an empty, uninitialized machine with the given configuration.
    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            registry: StateRegistry::new(config.duplicate_states),
            table: TransitionTable::new(),
            current: None,
            config,
        }
    }

    /// Configuration the machine was created with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Register a caller-constructed state under `name`.
    pub fn register_state<S>(
        &mut self,
        name: impl Into<String>,
        state: S,
    ) -> Result<StateId, MachineError>
    where
        S: State<D> + 'static,
    {
        self.register_boxed(name, Box::new(state))
    }

    /// Register an already boxed state under `name`.
    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        state: Box<dyn State<D>>,
    ) -> Result<StateId, MachineError> {
        let name = name.into();
        let id = self.registry.register(name.clone(), state)?;
        trace!(machine = %self.config.label, state = %name, "registered state");
        Ok(id)
    }

    /// Register the state produced by `factory` under `name`.
    ///
    /// The factory captures whatever constructor arguments the variant needs.
    pub fn register_with<S, F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<StateId, MachineError>
    where
        S: State<D> + 'static,
        F: FnOnce() -> S,
    {
        self.register_state(name, factory())
    }

    /// Register a default-constructed `S` under `name`.
    pub fn register_default<S>(&mut self, name: impl Into<String>) -> Result<StateId, MachineError>
    where
        S: State<D> + Default + 'static,
    {
        self.register_state(name, S::default())
    }

    /// Declare that `action` moves `from` to `to`.
    ///
    /// Pass [`Target::No`] (or the source name itself) to declare that the
    /// action does nothing from `from`. Names are resolved lazily, when the
    /// action is handled.
    pub fn add_transition(&mut self, action: A, from: impl Into<String>, to: impl Into<Target>) {
        self.table.add(action, from, to);
    }

    /// Designate the current state. No hooks run.
    pub fn set_starting_state(&mut self, name: &str) -> Result<(), MachineError> {
        let id = self
            .registry
            .id_of(name)
            .ok_or_else(|| MachineError::UnregisteredState {
                name: name.to_string(),
            })?;
        self.current = Some(id);
        info!(machine = %self.config.label, state = %name, "starting state set");
        Ok(())
    }

    /// Current lifecycle status (pure).
    pub fn status(&self) -> Status {
        match self.current {
            Some(_) => Status::Ready,
            None => Status::Uninitialized,
        }
    }

    /// Whether a starting state has been set.
    pub fn is_ready(&self) -> bool {
        self.status() == Status::Ready
    }

    /// Handle one action.
    ///
    /// Returns `Ok(true)` when a transition happened and `Ok(false)` when the
    /// action is declared as having no effect from the current state.
    ///
    /// If the target's validator rejects the data the current state stays
    /// put, but whatever the outgoing `before_leave` hook changed remains
    /// changed.
    pub fn handle_action(&mut self, action: &A) -> Result<bool, MachineError> {
        let current = self.current.ok_or(MachineError::NotReady)?;

        if self.table.bucket(action).is_none() {
            return Err(MachineError::NoTransitionRegisteredForAction {
                action: format!("{action:?}"),
            });
        }

        let Some(from) = self.registry.name_of(current) else {
            return Err(self.unregistered_current(current));
        };

        let record = self.table.lookup(action, from).ok_or_else(|| {
            MachineError::NoTransitionForCurrentState {
                action: format!("{action:?}"),
                state: from.to_string(),
            }
        })?;

        let Some(to) = record.destination() else {
            debug!(machine = %self.config.label, ?action, state = %from, "declared no-op");
            return Ok(false);
        };
        let from = from.to_string();
        let to = to.to_string();

        let Some(outgoing) = self.registry.get_mut(current) else {
            return Err(self.unregistered_current(current));
        };
        trace!(machine = %self.config.label, state = %from, "before_leave");
        outgoing.before_leave();
        let data = outgoing.get_data();

        let target = self.registry.id_of(&to);
        let Some(incoming) = target.and_then(|id| self.registry.get_mut(id)) else {
            warn!(
                machine = %self.config.label, ?action, %from, %to,
                "transition targets unregistered state"
            );
            return Err(MachineError::TargetStateUnregistered {
                action: format!("{action:?}"),
                from,
                to,
            });
        };

        if !incoming.validate(&data) {
            warn!(machine = %self.config.label, ?action, %from, %to, "data rejected by validator");
            return Err(MachineError::ValidationRejected { from, to });
        }
        incoming.set_data(data);
        self.current = target;

        trace!(machine = %self.config.label, state = %to, "after_enter");
        incoming.after_enter();

        debug!(machine = %self.config.label, ?action, %from, %to, "transitioned");
        Ok(true)
    }

    /// The current state.
    pub fn get_current_state(&self) -> Result<&dyn State<D>, MachineError> {
        let current = self.current.ok_or(MachineError::NotReady)?;
        self.registry
            .get(current)
            .ok_or_else(|| self.unregistered_current(current))
    }

    /// Name the current state was registered under.
    pub fn current_state_name(&self) -> Result<&str, MachineError> {
        let current = self.current.ok_or(MachineError::NotReady)?;
        self.registry
            .name_of(current)
            .ok_or_else(|| self.unregistered_current(current))
    }

    /// Handle of the current state, if any (pure).
    pub fn current_id(&self) -> Option<StateId> {
        self.current
    }

    /// Registered state by name, current or not.
    pub fn state(&self, name: &str) -> Option<&dyn State<D>> {
        self.registry.get_by_name(name)
    }

    /// Registered states (read-only).
    pub fn registry(&self) -> &StateRegistry<D> {
        &self.registry
    }

    /// Declared transitions (read-only).
    pub fn table(&self) -> &TransitionTable<A> {
        &self.table
    }

    pub(crate) fn registry_mut(&mut self) -> &mut StateRegistry<D> {
        &mut self.registry
    }

    /// Point the current handle at `id` without running hooks.
    pub(crate) fn jump_to(&mut self, id: StateId) {
        self.current = Some(id);
    }

    /// Error for a current handle the registry cannot resolve.
    ///
    /// Uses `describe()` when the entry exists, otherwise the handle index.
    fn unregistered_current(&self, id: StateId) -> MachineError {
        let description = match self.registry.get(id) {
            Some(state) => state.describe().to_string(),
            None => format!("#{}", id.index()),
        };
        MachineError::CurrentStateUnregistered { description }
    }
}

impl<A: Action, D: DataPack> Default for StateMachine<A, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action, D: DataPack> fmt::Debug for StateMachine<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("label", &self.config.label)
            .field("states", &self.registry)
            .field("transitions", &self.table.len())
            .field("current", &self.current_state_name().ok())
            .finish()
    }
}
