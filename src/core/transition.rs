//! Transition records stored in the transition table.

use std::fmt;

/// Target of a declared transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Declared as having no effect for this action from this state.
    No,
    /// Move to the state registered under this name.
    State(String),
}

impl Target {
    /// Name of the target state, or `None` for [`Target::No`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::No => None,
            Self::State(name) => Some(name),
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::State(name.to_string())
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self::State(name)
    }
}

impl From<Option<&str>> for Target {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Self::No, |name| Self::State(name.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::No => f.write_str("<no transition>"),
            Self::State(name) => f.write_str(name),
        }
    }
}

/// A single `(from, to)` declaration, keyed by action in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: String,
    pub to: Target,
}

impl TransitionRecord {
    /// Create a record moving `from` to `to`.
    pub fn new(from: impl Into<String>, to: impl Into<Target>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Check whether executing this record changes nothing.
    ///
    /// Both an explicit [`Target::No`] and a self-loop count as a no-op.
    pub fn is_noop(&self) -> bool {
        match &self.to {
            Target::No => true,
            Target::State(to) => *to == self.from,
        }
    }

    /// Target name when this record describes a real move.
    pub fn destination(&self) -> Option<&str> {
        if self.is_noop() {
            None
        } else {
            self.to.name()
        }
    }
}
