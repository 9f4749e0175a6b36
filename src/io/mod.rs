//! Input/output helpers.
//!
//! - JSON result exports with a small metadata envelope (`export`)
//! - snapshot file writing for `ms fetch` (`snapshots`)

pub mod export;
pub mod snapshots;

pub use export::*;
pub use snapshots::*;

use std::fmt::Display;
use std::path::Path;

use crate::error::AppError;

fn io_error(path: &Path, err: impl Display) -> AppError {
    AppError::new(2, format!("Failed to write '{}': {err}", path.display()))
}
