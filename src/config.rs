//! Machine configuration.
//!
//! Configuration covers the implementation-defined policies of the engine.
//! It is plain data and can be loaded from JSON.

use serde::{Deserialize, Serialize};

/// What to do when a state name is registered a second time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateState`, keeping the first instance.
    #[default]
    Reject,

    /// Swap in the new instance under the same handle.
    Replace,
}

/// Configuration for a [`StateMachine`](crate::engine::StateMachine).
///
/// # Example
///
/// ```rust
/// use handover::config::{DuplicatePolicy, MachineConfig};
///
/// let config = MachineConfig::from_json(r#"{ "label": "washer", "duplicate_states": "replace" }"#)
///     .unwrap();
/// assert_eq!(config.label, "washer");
/// assert_eq!(config.duplicate_states, DuplicatePolicy::Replace);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name attached to every log event emitted by the machine.
    pub label: String,

    /// Policy for re-registering a state name.
    pub duplicate_states: DuplicatePolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            label: "state-machine".to_string(),
            duplicate_states: DuplicatePolicy::Reject,
        }
    }
}

impl MachineConfig {
    /// Parse a configuration, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the label attached to log events.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the policy for re-registering a state name.
    pub fn with_duplicate_states(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_states = policy;
        self
    }
}
