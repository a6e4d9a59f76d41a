//! Failures while writing or reading a snapshot.

use thiserror::Error;

/// Why a snapshot could not be written or read back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The data pack or envelope could not be encoded
    #[error("could not encode snapshot: {0}")]
    SerializationFailed(String),

    /// The input is not a snapshot of this data pack type
    #[error("could not decode snapshot: {0}")]
    DeserializationFailed(String),

    /// The snapshot decoded but uses a format this build does not read
    #[error("snapshot written in format v{found}, this build reads v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
