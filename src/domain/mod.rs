//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - raw per-country indicator readings (`RawSnapshot`) and the indicator catalogue (`Indicator`)
//! - engine outputs (`ScoreBreakdown`, `PairSentiment`, `InstrumentScore`)
//! - static reference data (instrument table, tracked currencies)

pub mod reference;
pub mod types;

pub use reference::*;
pub use types::*;
