//! Snapshot sources: where raw per-country indicator readings come from.
//!
//! The engine never fetches anything itself; callers pick a source, load once,
//! and hand the snapshot list to `score`.

use crate::domain::RawSnapshot;
use crate::error::SentimentError;

pub mod file;
pub mod tradingeconomics;

pub use file::JsonFileSource;
pub use tradingeconomics::TradingEconomicsSource;

/// Supplies the latest raw snapshot for each tracked country.
pub trait SnapshotSource {
    /// Short label used in logs and errors.
    fn name(&self) -> &str;

    /// Load every available snapshot. Failures are terminal for the request.
    fn load(&self) -> Result<Vec<RawSnapshot>, SentimentError>;
}

/// In-memory source, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshots: Vec<RawSnapshot>,
}

impl StaticSource {
    pub fn new(snapshots: Vec<RawSnapshot>) -> Self {
        Self { snapshots }
    }
}

impl SnapshotSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<Vec<RawSnapshot>, SentimentError> {
        Ok(self.snapshots.clone())
    }
}
