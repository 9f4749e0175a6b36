//! Command-line parsing for the macro sentiment tool.
//!
//! Argument parsing and command dispatch live apart from the scoring engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ms",
    version,
    about = "Macro sentiment scores for currencies, pairs and instruments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every country in the snapshot set.
    Scores(ScoresArgs),
    /// Relative sentiment of a base currency against a quote currency.
    Pair(PairArgs),
    /// Project country scores onto the instrument table.
    Instruments(OutputArgs),
    /// Pull the latest indicators from TradingEconomics into a snapshot file.
    Fetch(FetchArgs),
}

/// Where snapshots are loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Local snapshot JSON file (`--file` or `MACRO_FILE`).
    File,
    /// Live TradingEconomics API (`TE_KEY`).
    Te,
}

/// Options shared by every scoring command.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Snapshot source.
    #[arg(long, value_enum, default_value_t = SourceKind::File)]
    pub source: SourceKind,

    /// Snapshot JSON file (overrides MACRO_FILE).
    #[arg(short = 'f', long, value_name = "JSON")]
    pub file: Option<PathBuf>,

    /// Print the result as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,

    /// Also write the result to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ScoresArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Show top-N strongest and weakest countries.
    #[arg(long, default_value_t = 3)]
    pub top: usize,
}

#[derive(Debug, Clone, Args)]
pub struct PairArgs {
    /// Base currency code, e.g. GBP.
    #[arg(short = 'b', long)]
    pub base: String,

    /// Quote currency code, e.g. USD.
    #[arg(short = 'q', long)]
    pub quote: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Destination snapshot file (defaults to MACRO_FILE).
    #[arg(short = 'o', long, value_name = "JSON")]
    pub out: Option<PathBuf>,

    /// Only fetch these currency codes (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}
