//! Write snapshot files in the format `JsonFileSource` reads.

use std::fs::File;
use std::path::Path;

use super::io_error;
use crate::domain::RawSnapshot;
use crate::error::AppError;

/// Write snapshots as a JSON array. Absent readings are written as `null`.
pub fn write_snapshots(path: &Path, snapshots: &[RawSnapshot]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_error(parent, e))?;
    }
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    serde_json::to_writer_pretty(file, snapshots)
        .map_err(|e| io_error(path, e))?;
    Ok(())
}
