//! Versioned machine snapshots.
//!
//! A snapshot wraps a machine definition with enough metadata to store it
//! outside the process and load it back later, as JSON for people or as a
//! compact binary encoding. Loading validates the machine, so a snapshot
//! that loads is always structurally sound.

use crate::core::State;
use crate::machine::Machine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable machine definition plus metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineSnapshot<S: State> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// The machine definition
    pub machine: Machine<S>,
}

impl<S: State> MachineSnapshot<S> {
    /// Snapshot `machine` under a fresh identifier.
    pub fn new(machine: Machine<S>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            machine,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.verify()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self =
            bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.verify()
    }

    fn verify(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let violations = self.machine.violations();
        if !violations.is_empty() {
            return Err(SnapshotError::MalformedMachine(violations));
        }

        Ok(self)
    }
}
