//! Snapshot error types.

use crate::machine::MachineViolation;
use thiserror::Error;

/// Errors that can occur when saving or loading machine snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The stored machine is structurally malformed
    #[error("Snapshot holds a malformed machine ({} violation(s))", .0.len())]
    MalformedMachine(Vec<MachineViolation>),
}
