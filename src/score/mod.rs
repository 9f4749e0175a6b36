//! Macro sentiment scoring engine.
//!
//! Stages, leaves first:
//!
//! - `normalize`: raw indicator reading -> bounded component in `[-1, 1]`
//! - `aggregate`: snapshot -> `ScoreBreakdown` (rounded mean + rationale)
//! - `explain`: band classification and driver selection shared by every stage
//! - `pair`: two breakdowns -> `PairSentiment`
//! - `instrument`: breakdowns + instrument table -> `InstrumentScore`s
//!
//! Every entry point is a pure function of its arguments. Nothing is cached
//! between calls, so concurrent callers only need their own inputs.

pub mod aggregate;
pub mod explain;
pub mod instrument;
pub mod normalize;
pub mod pair;

pub use aggregate::{score_by_country, score_snapshot};
pub use instrument::derive_instrument_scores;
pub use normalize::{normalize, normalize_snapshot};
pub use pair::derive_sentiment;

/// Decimal places kept on every score and component.
pub const SCORE_DECIMALS: i32 = 3;
