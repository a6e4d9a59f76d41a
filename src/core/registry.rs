//! Registry owning every state instance of a machine.
//!
//! States live in an arena that only grows. A [`StateId`] is an index into
//! that arena and stays valid for the registry's lifetime; the machine keeps
//! one as its non-owning reference to the current state.

use super::state::{DataPack, State};
use crate::config::DuplicatePolicy;
use crate::error::MachineError;
use std::collections::HashMap;
use std::fmt;

/// Stable handle to a registered state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    /// Position of the entry in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

struct Entry<D: DataPack> {
    name: String,
    state: Box<dyn State<D>>,
}

/// Name-keyed owner of boxed state instances.
pub struct StateRegistry<D: DataPack> {
    entries: Vec<Entry<D>>,
    index: HashMap<String, StateId>,
    policy: DuplicatePolicy,
}

impl<D: DataPack> StateRegistry<D> {
    /// Create an empty registry using `policy` for repeated names.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            policy,
        }
    }

    /// Store `state` under `name`.
    ///
    /// A repeated name either fails or swaps the instance in place, keeping
    /// its handle, depending on the registry's [`DuplicatePolicy`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        state: Box<dyn State<D>>,
    ) -> Result<StateId, MachineError> {
        let name = name.into();

        if let Some(&id) = self.index.get(&name) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(MachineError::DuplicateState { name }),
                DuplicatePolicy::Replace => {
                    self.entries[id.0].state = state;
                    Ok(id)
                }
            };
        }

        let id = StateId(self.entries.len());
        self.entries.push(Entry {
            name: name.clone(),
            state,
        });
        self.index.insert(name, id);
        Ok(id)
    }

    /// Handle registered under `name`, if any.
    pub fn id_of(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// Reverse lookup: the name the handle's entry was registered under.
    pub fn name_of(&self, id: StateId) -> Option<&str> {
        self.entries.get(id.0).map(|entry| entry.name.as_str())
    }

    /// Whether `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// State behind `id` (read-only).
    pub fn get(&self, id: StateId) -> Option<&dyn State<D>> {
        self.entries.get(id.0).map(|entry| &*entry.state)
    }

    /// State behind `id` (mutable).
    pub fn get_mut(&mut self, id: StateId) -> Option<&mut (dyn State<D> + 'static)> {
        self.entries.get_mut(id.0).map(|entry| &mut *entry.state)
    }

    /// State registered under `name` (read-only).
    pub fn get_by_name(&self, name: &str) -> Option<&dyn State<D>> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no state has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: DataPack> Default for StateRegistry<D> {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

impl<D: DataPack> fmt::Debug for StateRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|entry| (&entry.name, entry.state.describe())),
            )
            .finish()
    }
}
