//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the snapshot source from config + flags
//! - runs the scoring pipeline
//! - prints reports or JSON and writes optional exports

use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{Command, FetchArgs, OutputArgs, PairArgs, ScoresArgs};
use crate::config::AppConfig;
use crate::data::{SnapshotSource, TradingEconomicsSource};
use crate::domain::{CURRENCIES, Currency, INSTRUMENTS};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ms` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Command::Scores(args) => handle_scores(args, &config),
        Command::Pair(args) => handle_pair(args, &config),
        Command::Instruments(args) => handle_instruments(args, &config),
        Command::Fetch(args) => handle_fetch(args, &config),
    }
}

fn source_for(
    output: &OutputArgs,
    config: &AppConfig,
) -> Result<Box<dyn SnapshotSource>, AppError> {
    pipeline::build_source(output.source, output.file.clone(), config)
}

fn handle_scores(args: ScoresArgs, config: &AppConfig) -> Result<(), AppError> {
    let source = source_for(&args.output, config)?;
    let breakdowns = pipeline::run_scores(source.as_ref())?;

    emit(&args.output, &breakdowns, || {
        let rankings = crate::report::rank_strong_weak(&breakdowns, args.top);
        crate::report::format_breakdowns(&breakdowns, &rankings)
    })
}

fn handle_pair(args: PairArgs, config: &AppConfig) -> Result<(), AppError> {
    let source = source_for(&args.output, config)?;
    let pair = pipeline::run_pair(source.as_ref(), &args.base, &args.quote)?;

    emit(&args.output, &pair, || crate::report::format_pair(&pair))
}

fn handle_instruments(args: OutputArgs, config: &AppConfig) -> Result<(), AppError> {
    let source = source_for(&args, config)?;
    let scores = pipeline::run_instruments(source.as_ref(), INSTRUMENTS)?;

    let report = || crate::report::format_instruments(&scores, INSTRUMENTS);
    emit(&args, &scores, report)
}

fn handle_fetch(args: FetchArgs, config: &AppConfig) -> Result<(), AppError> {
    let key = config.require_te_key()?;
    let currencies = select_currencies(&args.only)?;
    let source = TradingEconomicsSource::new(key, config.te_base_url.clone())
        .with_currencies(currencies);

    let snapshots = pipeline::load_snapshots(&source)?;
    let out = args.out.unwrap_or_else(|| config.macro_file.clone());
    crate::io::write_snapshots(&out, &snapshots)?;

    info!(path = %out.display(), countries = snapshots.len(), "wrote snapshot file");
    println!("Wrote {} snapshots to {}", snapshots.len(), out.display());
    Ok(())
}

/// Print JSON or the text report, then write the optional export.
fn emit<T, F>(output: &OutputArgs, data: &T, report: F) -> Result<(), AppError>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if output.json {
        println!("{}", crate::io::to_pretty_json(data)?);
    } else {
        print!("{}", report());
    }

    if let Some(path) = &output.export {
        crate::io::write_json_export(path, data)?;
        info!(path = %path.display(), "wrote export");
    }
    Ok(())
}

fn select_currencies(only: &[String]) -> Result<Vec<Currency>, AppError> {
    if only.is_empty() {
        return Ok(CURRENCIES.to_vec());
    }
    only.iter()
        .map(|code| {
            crate::domain::find_currency(code.trim())
                .copied()
                .ok_or_else(|| AppError::new(2, format!("Unknown currency '{code}'.")))
        })
        .collect()
}
