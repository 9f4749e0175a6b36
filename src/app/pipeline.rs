//! Shared "load -> score -> derive" pipeline used by every command.
//!
//! Each call loads a fresh snapshot list from its source and recomputes
//! everything from it; nothing is cached between calls.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::SourceKind;
use crate::config::AppConfig;
use crate::data::{JsonFileSource, SnapshotSource, TradingEconomicsSource};
use crate::domain::{
    InstrumentDef, InstrumentScore, PairSentiment, RawSnapshot, ScoreBreakdown,
};
use crate::error::AppError;
use crate::score::{derive_instrument_scores, derive_sentiment, score_by_country};

/// Build the snapshot source selected on the command line.
pub fn build_source(
    kind: SourceKind,
    file: Option<PathBuf>,
    config: &AppConfig,
) -> Result<Box<dyn SnapshotSource>, AppError> {
    match kind {
        SourceKind::File => {
            let path = file.unwrap_or_else(|| config.macro_file.clone());
            Ok(Box::new(JsonFileSource::new(path)))
        }
        SourceKind::Te => {
            let key = config.require_te_key()?;
            let source = TradingEconomicsSource::new(key, config.te_base_url.clone());
            Ok(Box::new(source))
        }
    }
}

pub fn load_snapshots(source: &dyn SnapshotSource) -> Result<Vec<RawSnapshot>, AppError> {
    let snapshots = source.load()?;
    for country in duplicate_countries(&snapshots) {
        warn!(country, "duplicate snapshot, the later one is used");
    }
    info!(
        source = source.name(),
        countries = snapshots.len(),
        "snapshots ready"
    );
    Ok(snapshots)
}

/// Countries listed more than once in a snapshot set.
fn duplicate_countries(snapshots: &[RawSnapshot]) -> BTreeSet<&str> {
    let mut seen = BTreeSet::new();
    snapshots
        .iter()
        .map(|s| s.country.as_str())
        .filter(|country| !seen.insert(*country))
        .collect()
}

pub fn run_scores(
    source: &dyn SnapshotSource,
) -> Result<BTreeMap<String, ScoreBreakdown>, AppError> {
    let snapshots = load_snapshots(source)?;
    Ok(score_by_country(&snapshots))
}

pub fn run_pair(
    source: &dyn SnapshotSource,
    base: &str,
    quote: &str,
) -> Result<PairSentiment, AppError> {
    let base = normalize_code(base)?;
    let quote = normalize_code(quote)?;
    let breakdowns = run_scores(source)?;
    Ok(derive_sentiment(&breakdowns, &base, &quote)?)
}

pub fn run_instruments(
    source: &dyn SnapshotSource,
    table: &[InstrumentDef],
) -> Result<BTreeMap<String, InstrumentScore>, AppError> {
    let breakdowns = run_scores(source)?;
    Ok(derive_instrument_scores(&breakdowns, table))
}

/// Trim and upper-case a currency code; it must be three ASCII letters.
pub fn normalize_code(code: &str) -> Result<String, AppError> {
    let code = code.trim().to_ascii_uppercase();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        let message = format!("Invalid currency code '{code}': expected three letters, e.g. GBP.");
        Err(AppError::new(2, message))
    }
}
