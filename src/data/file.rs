//! Snapshot file source (flat JSON array of country objects).

use std::path::{Path, PathBuf};

use tracing::info;

use crate::data::SnapshotSource;
use crate::domain::RawSnapshot;
use crate::error::SentimentError;

/// Reads snapshots from a JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<Vec<RawSnapshot>, SentimentError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            SentimentError::source_unavailable(
                self.name(),
                format!("failed to read macro file '{}': {e}", self.path.display()),
            )
        })?;
        let snapshots = parse_snapshots(&text).map_err(|e| {
            SentimentError::source_unavailable(
                self.name(),
                format!("failed to parse macro file '{}': {e}", self.path.display()),
            )
        })?;
        info!(path = %self.path.display(), countries = snapshots.len(), "loaded macro snapshots");
        Ok(snapshots)
    }
}

/// Decode a snapshot array.
pub fn parse_snapshots(json: &str) -> Result<Vec<RawSnapshot>, serde_json::Error> {
    serde_json::from_str(json)
}
