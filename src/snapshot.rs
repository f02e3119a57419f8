//! Snapshot (de)serialization
//!
//! A snapshot is a JSON array of records as the persistence layer writes
//! them.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::CredentialRecord;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read snapshot file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parses a snapshot from JSON. Record order is preserved.
pub fn decode_snapshot(json: &str) -> Result<Vec<CredentialRecord>, SnapshotError> {
    serde_json::from_str(json).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Snapshot decode FAILED: {}", e);
        SnapshotError::Decode(e)
    })
}

/// Reads and parses a snapshot file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - Content is not a JSON array of records
pub fn load_snapshot_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CredentialRecord>, SnapshotError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Snapshot load FAILED: FileNotFound {:?}", path);
        return Err(SnapshotError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let records = decode_snapshot(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Snapshot loaded: {} records from {:?}", records.len(), path);

    Ok(records)
}

/// Serializes records to a JSON snapshot.
pub fn encode_snapshot(records: &[CredentialRecord]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(records)?)
}
