//! Export engine results to JSON.
//!
//! Exports wrap the payload in an envelope so downstream consumers can tell
//! which tool produced the file and when.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::io_error;
use crate::error::AppError;

pub const TOOL_NAME: &str = "ms";

#[derive(Debug, Serialize)]
pub struct ExportEnvelope<'a, T: Serialize> {
    pub tool: &'static str,
    pub generated_at: DateTime<Utc>,
    pub data: &'a T,
}

impl<'a, T: Serialize> ExportEnvelope<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            tool: TOOL_NAME,
            generated_at: Utc::now(),
            data,
        }
    }
}

/// Pretty-print any result as JSON (used by `--json`).
pub fn to_pretty_json<T: Serialize>(data: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(data)
        .map_err(|e| AppError::new(4, format!("Failed to encode JSON: {e}")))
}

/// Write `data` inside an export envelope.
pub fn write_json_export<T: Serialize>(path: &Path, data: &T) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    serde_json::to_writer_pretty(file, &ExportEnvelope::new(data))
        .map_err(|e| io_error(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::Value;

    use super::*;

    #[test]
    fn export_wraps_payload_in_envelope() {
        let path = std::env::temp_dir().join(format!("ms_export_{}.json", std::process::id()));
        let data = BTreeMap::from([("USD".to_string(), 0.15)]);
        write_json_export(&path, &data).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tool"], "ms");
        assert_eq!(value["data"]["USD"], 0.15);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn unwritable_export_path_is_a_usage_error() {
        let path = std::env::temp_dir().join("ms_missing_dir/nested/out.json");
        let err = write_json_export(&path, &0.5).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("out.json"));
    }
}
