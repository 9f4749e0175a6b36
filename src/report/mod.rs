//! Reporting utilities: rankings and formatted terminal output.

use std::collections::BTreeMap;

use crate::domain::ScoreBreakdown;

pub mod format;

pub use format::*;

/// Strongest/weakest countries (top-N each side).
#[derive(Debug, Clone)]
pub struct Rankings {
    pub strongest: Vec<ScoreBreakdown>,
    pub weakest: Vec<ScoreBreakdown>,
}

/// Rank countries by total score. Ties keep country-code order.
pub fn rank_strong_weak(breakdowns: &BTreeMap<String, ScoreBreakdown>, top_n: usize) -> Rankings {
    let mut sorted: Vec<&ScoreBreakdown> = breakdowns.values().collect();
    sorted.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    let strongest = sorted.iter().take(top_n).map(|b| (*b).clone()).collect();

    sorted.sort_by(|a, b| a.total_score.total_cmp(&b.total_score));
    let weakest = sorted.iter().take(top_n).map(|b| (*b).clone()).collect();

    Rankings { strongest, weakest }
}
