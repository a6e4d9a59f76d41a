//! Point-in-time snapshots of a running machine.
//!
//! A snapshot records which state is current and the data pack it holds.
//! It does not contain the transition table or the state instances
//! themselves, and no history is kept: each snapshot stands alone. Host
//! programs that want a trail take one at every transition boundary.

use crate::core::{Action, DataPack};
use crate::engine::StateMachine;
use crate::error::MachineError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable view of the current state of a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<D> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Registered name of the current state
    pub state: String,

    /// `describe()` of the current state at the time
    pub description: String,

    /// Copy of the current state's data pack
    pub data: D,
}

impl<D> Snapshot<D>
where
    D: Serialize + DeserializeOwned,
{
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting other format versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode, rejecting other format versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

impl<A: Action, D: DataPack> StateMachine<A, D> {
    /// Capture the current state's name, description and data.
    pub fn snapshot(&self) -> Result<Snapshot<D>, MachineError> {
        let state = self.current_state_name()?.to_string();
        let current = self.get_current_state()?;

        Ok(Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            state,
            description: current.describe().to_string(),
            data: current.get_data(),
        })
    }

    /// Make the snapshot's state current and hand it the snapshot's data.
    ///
    /// The data must pass the state's validator. No hooks run. Works on an
    /// uninitialized machine as well, acting as a starting state.
    pub fn restore(&mut self, snapshot: &Snapshot<D>) -> Result<(), MachineError> {
        let id = self
            .registry()
            .id_of(&snapshot.state)
            .ok_or_else(|| MachineError::UnregisteredState {
                name: snapshot.state.clone(),
            })?;

        let from = self
            .current_state_name()
            .map(str::to_string)
            .unwrap_or_else(|_| snapshot.state.clone());

        let state = self
            .registry_mut()
            .get_mut(id)
            .ok_or_else(|| MachineError::UnregisteredState {
                name: snapshot.state.clone(),
            })?;
        if !state.validate(&snapshot.data) {
            return Err(MachineError::ValidationRejected {
                from,
                to: snapshot.state.clone(),
            });
        }
        state.set_data(snapshot.data.clone());
        self.jump_to(id);

        info!(
            machine = %self.config().label,
            state = %snapshot.state,
            snapshot = %snapshot.id,
            "restored snapshot"
        );
        Ok(())
    }
}
