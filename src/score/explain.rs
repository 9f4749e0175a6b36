//! Rationale text shared by every derivation stage.
//!
//! Two independent pieces:
//!
//! - **Bands**: a score is classified into one of five buckets with fixed
//!   thresholds. Only the wording differs between call sites.
//! - **Drivers**: components whose magnitude crosses a threshold, capped per side.
//!   Candidates are ordered by descending absolute value, ties by ascending key,
//!   so generated text is reproducible.

use std::cmp::Ordering;

use crate::domain::Indicator;

const STRONG: f64 = 0.3;
const MILD: f64 = 0.1;

/// Qualitative classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    StrongPositive,
    MildPositive,
    Neutral,
    MildNegative,
    StrongNegative,
}

impl Band {
    pub fn classify(score: f64) -> Self {
        if score > STRONG {
            Band::StrongPositive
        } else if score > MILD {
            Band::MildPositive
        } else if score < -STRONG {
            Band::StrongNegative
        } else if score < -MILD {
            Band::MildNegative
        } else {
            Band::Neutral
        }
    }

    pub fn phrase(self, phrases: &BandPhrases) -> &'static str {
        match self {
            Band::StrongPositive => phrases.strong_positive,
            Band::MildPositive => phrases.mild_positive,
            Band::Neutral => phrases.neutral,
            Band::MildNegative => phrases.mild_negative,
            Band::StrongNegative => phrases.strong_negative,
        }
    }
}

/// Wording for each band at one call site.
#[derive(Debug, Clone, Copy)]
pub struct BandPhrases {
    pub strong_positive: &'static str,
    pub mild_positive: &'static str,
    pub neutral: &'static str,
    pub mild_negative: &'static str,
    pub strong_negative: &'static str,
}

pub const COUNTRY_BANDS: BandPhrases = BandPhrases {
    strong_positive: "overall strong",
    mild_positive: "slightly positive",
    neutral: "roughly neutral",
    mild_negative: "slightly negative",
    strong_negative: "overall weak",
};

pub const PAIR_BANDS: BandPhrases = BandPhrases {
    strong_positive: "much stronger than",
    mild_positive: "stronger than",
    neutral: "roughly in line with",
    mild_negative: "weaker than",
    strong_negative: "much weaker than",
};

pub const INSTRUMENT_BANDS: BandPhrases = BandPhrases {
    strong_positive: "strong bullish bias",
    mild_positive: "mild bullish bias",
    neutral: "roughly neutral stance",
    mild_negative: "mild bearish bias",
    strong_negative: "strong bearish bias",
};

/// Threshold and per-side cap for driver selection.
#[derive(Debug, Clone, Copy)]
pub struct DriverPolicy {
    /// Inclusive magnitude a component must reach to count as a driver.
    pub threshold: f64,
    pub max_per_side: usize,
}

pub const COUNTRY_DRIVERS: DriverPolicy = DriverPolicy {
    threshold: 0.15,
    max_per_side: 3,
};

pub const PAIR_DRIVERS: DriverPolicy = DriverPolicy {
    threshold: 0.2,
    max_per_side: 2,
};

pub const INSTRUMENT_DRIVERS: DriverPolicy = DriverPolicy {
    threshold: 0.15,
    max_per_side: 3,
};

/// Selected drivers, strongest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drivers<'a> {
    pub supportive: Vec<(&'a str, f64)>,
    pub headwinds: Vec<(&'a str, f64)>,
}

impl Drivers<'_> {
    pub fn is_empty(&self) -> bool {
        self.supportive.is_empty() && self.headwinds.is_empty()
    }
}

/// Pick up to `max_per_side` supportive (`>= threshold`) and headwind
/// (`<= -threshold`) entries.
pub fn select_drivers<'a, I>(components: I, policy: DriverPolicy) -> Drivers<'a>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut supportive = Vec::new();
    let mut headwinds = Vec::new();
    for (key, value) in components {
        if value >= policy.threshold {
            supportive.push((key, value));
        } else if value <= -policy.threshold {
            headwinds.push((key, value));
        }
    }

    for side in [&mut supportive, &mut headwinds] {
        side.sort_by(|a, b| by_strength(*a, *b));
        side.truncate(policy.max_per_side);
    }

    Drivers {
        supportive,
        headwinds,
    }
}

fn by_strength(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.abs().total_cmp(&a.1.abs()).then_with(|| a.0.cmp(b.0))
}

/// Join phrases as natural language: `a`, `a and b`, `a, b and c`.
pub fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// `"<subject> <band phrase> (score 0.12)."`
pub fn headline(subject: &str, band_phrase: &str, score: f64) -> String {
    format!("{subject} {band_phrase} (score {score:.2}).")
}

/// Optional `Supportive factors include ...` / `Headwinds come from ...` clauses.
pub fn driver_clauses<S: AsRef<str>>(supportive: &[S], headwinds: &[S]) -> String {
    let mut text = String::new();
    if !supportive.is_empty() {
        let list = join_with_and(supportive);
        text.push_str(&format!(" Supportive factors include {list}."));
    }
    if !headwinds.is_empty() {
        let list = join_with_and(headwinds);
        text.push_str(&format!(" Headwinds come from {list}."));
    }
    text
}

/// Country-level driver label. Unknown keys are used verbatim.
pub fn country_label(key: &str, supportive: bool) -> &str {
    let Some(indicator) = Indicator::from_key(key) else {
        return key;
    };
    match (indicator, supportive) {
        (Indicator::GdpGrowth, _) => "GDP growth",
        (Indicator::Unemployment, true) => "low unemployment",
        (Indicator::Unemployment, false) => "high unemployment",
        (Indicator::Inflation, true) => "inflation near target",
        (Indicator::Inflation, false) => "inflation away from target",
        (Indicator::InterestRate, _) => "interest rate level",
        (Indicator::CurrentAccount, _) => "current account balance",
        (Indicator::BalanceOfTrade, _) => "balance of trade",
        (Indicator::BusinessConfidence, _) => "business confidence",
        (Indicator::ManufacturingPmi, _) => "manufacturing PMI",
        (Indicator::ServicesPmi, _) => "services PMI",
        (Indicator::ConsumerConfidence, _) => "consumer confidence",
        (Indicator::RetailSalesMom, _) => "retail sales momentum",
    }
}

/// Label for a comparative edge. `favours_base` phrases it from the base side.
pub fn pair_label(key: &str, favours_base: bool) -> &str {
    let Some(indicator) = Indicator::from_key(key) else {
        return key;
    };
    match (indicator, favours_base) {
        (Indicator::GdpGrowth, true) => "stronger GDP growth",
        (Indicator::GdpGrowth, false) => "GDP growth",
        (Indicator::Unemployment, true) => "lower unemployment",
        (Indicator::Unemployment, false) => "unemployment",
        (Indicator::Inflation, true) => "more stable inflation",
        (Indicator::Inflation, false) => "inflation stability",
        (Indicator::InterestRate, true) => "higher interest rates",
        (Indicator::InterestRate, false) => "interest rate advantage",
        (Indicator::CurrentAccount, _) => "current account balance",
        (Indicator::BalanceOfTrade, _) => "trade balance",
        (Indicator::BusinessConfidence, _) => "business confidence",
        (Indicator::ManufacturingPmi, _) => "manufacturing PMI",
        (Indicator::ServicesPmi, _) => "services PMI",
        (Indicator::ConsumerConfidence, _) => "consumer confidence",
        (Indicator::RetailSalesMom, _) => "retail sales momentum",
    }
}
