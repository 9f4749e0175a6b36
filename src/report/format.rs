//! Terminal formatting for scores, pairs and instruments.
//!
//! Kept separate from the engine so output changes stay local.

use std::collections::BTreeMap;

use crate::domain::{InstrumentDef, InstrumentScore, PairSentiment, ScoreBreakdown, find_currency};
use crate::report::Rankings;

/// Width of the sentiment bar, in cells.
pub const BAR_WIDTH: usize = 21;

/// Per-country table, strongest/weakest lists and explanations.
pub fn format_breakdowns(
    breakdowns: &BTreeMap<String, ScoreBreakdown>,
    rankings: &Rankings,
) -> String {
    let mut out = String::new();
    out.push_str("=== ms - Macro Sentiment by Country ===\n");
    out.push_str(&format!(
        "{:<6} {:<20} {:>7} {:<BAR_WIDTH$} {:>5}\n",
        "code", "name", "score", "sentiment", "comps"
    ));
    out.push_str(&format!(
        "{:-<6} {:-<20} {:-<7} {:-<BAR_WIDTH$} {:-<5}\n",
        "", "", "", "", ""
    ));

    for b in breakdowns.values() {
        let name = find_currency(&b.country).map(|c| c.name).unwrap_or("");
        out.push_str(&format!(
            "{:<6} {:<20} {:>7.3} {} {:>5}\n",
            truncate(&b.country, 6),
            truncate(name, 20),
            b.total_score,
            sentiment_bar(b.total_score, BAR_WIDTH),
            b.components.len(),
        ));
    }

    out.push('\n');
    out.push_str(&format!("Strongest: {}\n", fmt_ranked(&rankings.strongest)));
    out.push_str(&format!("Weakest  : {}\n", fmt_ranked(&rankings.weakest)));

    out.push('\n');
    for b in breakdowns.values() {
        out.push_str(&format!("- {}\n", b.explanation));
    }
    out
}

/// Component-level detail for a single country.
pub fn format_components(b: &ScoreBreakdown) -> String {
    let mut out = String::new();
    for (key, value) in &b.components {
        out.push_str(&format!(
            "  {:<22} {:>7.3} {}\n",
            key,
            value,
            sentiment_bar(*value, BAR_WIDTH)
        ));
    }
    out
}

pub fn format_pair(pair: &PairSentiment) -> String {
    let mut out = String::new();
    let title = format!("{}/{}", pair.base, pair.quote);
    out.push_str(&format!("=== ms - {title} Macro Sentiment ===\n"));
    out.push_str(&format!(
        "{:<6} {:>7.3} {}\n",
        pair.base,
        pair.base_score,
        sentiment_bar(pair.base_score, BAR_WIDTH)
    ));
    out.push_str(&format!(
        "{:<6} {:>7.3} {}\n",
        pair.quote,
        pair.quote_score,
        sentiment_bar(pair.quote_score, BAR_WIDTH)
    ));
    out.push_str(&format!(
        "{:<6} {:>7.3} {}\n",
        "pair",
        pair.pair_score,
        sentiment_bar(pair.pair_score, BAR_WIDTH)
    ));
    out.push('\n');
    out.push_str(&pair.explanation);
    out.push('\n');

    out.push_str(&format!("\n{} components:\n", pair.base));
    out.push_str(&format_components(&pair.base_details));
    out.push_str(&format!("\n{} components:\n", pair.quote));
    out.push_str(&format_components(&pair.quote_details));
    out
}

/// Instrument table in definition-table order.
pub fn format_instruments(
    scores: &BTreeMap<String, InstrumentScore>,
    table: &[InstrumentDef],
) -> String {
    let mut out = String::new();
    out.push_str("=== ms - Instrument Macro Bias ===\n");
    out.push_str(&format!(
        "{:<8} {:<12} {:<6} {:<5} {:>7} {}\n",
        "symbol", "name", "class", "base", "score", "bias"
    ));
    out.push_str(&format!(
        "{:-<8} {:-<12} {:-<6} {:-<5} {:-<7} {:-<BAR_WIDTH$}\n",
        "", "", "", "", "", ""
    ));

    let mut skipped = Vec::new();
    for def in table {
        let Some(score) = scores.get(def.symbol) else {
            skipped.push(def.symbol);
            continue;
        };
        out.push_str(&format!(
            "{:<8} {:<12} {:<6} {:<5} {:>7.3} {}\n",
            def.symbol,
            truncate(def.name, 12),
            def.asset_class.display_name(),
            def.base,
            score.total_score,
            sentiment_bar(score.total_score, BAR_WIDTH),
        ));
    }
    if !skipped.is_empty() {
        out.push_str(&format!("(no base data for {})\n", skipped.join(", ")));
    }

    out.push('\n');
    for def in table {
        if let Some(score) = scores.get(def.symbol) {
            out.push_str(&format!("- {}\n", score.explanation));
        }
    }
    out
}

/// Horizontal bar for a score in `[-1, 1]`, centred on `|`.
///
/// `[-1, 0)` fills `-` to the left, `(0, 1]` fills `+` to the right.
pub fn sentiment_bar(score: f64, width: usize) -> String {
    let width = width.max(3) | 1;
    let half = width / 2;
    let score = if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let filled = (score.abs() * half as f64).round() as usize;

    let mut cells = vec![' '; width];
    cells[half] = '|';
    for i in 1..=filled {
        if score > 0.0 {
            cells[half + i] = '+';
        } else {
            cells[half - i] = '-';
        }
    }
    cells.into_iter().collect()
}

fn fmt_ranked(rows: &[ScoreBreakdown]) -> String {
    let parts: Vec<String> = rows
        .iter()
        .map(|b| format!("{} ({:.2})", b.country, b.total_score))
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
