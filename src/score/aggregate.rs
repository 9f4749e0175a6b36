//! Country aggregation: one snapshot in, one `ScoreBreakdown` out.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{ComponentScores, RawSnapshot, ScoreBreakdown};
use crate::math::{mean, round_to};
use crate::score::SCORE_DECIMALS;
use crate::score::explain::{
    Band, COUNTRY_BANDS, COUNTRY_DRIVERS, country_label, driver_clauses, headline, select_drivers,
};
use crate::score::normalize::normalize_snapshot;

/// Score a single snapshot.
///
/// The total is the mean of the rounded, non-NaN components, rounded again;
/// with no usable component it is `0`. Missing or malformed readings only drop
/// their own component.
pub fn score_snapshot(snapshot: &RawSnapshot) -> ScoreBreakdown {
    let components: ComponentScores = normalize_snapshot(snapshot)
        .into_iter()
        .filter(|(_, v)| !v.is_nan())
        .map(|(k, v)| (k, round_to(v, SCORE_DECIMALS)))
        .collect();

    let total = mean(components.values().copied())
        .map(|m| round_to(m, SCORE_DECIMALS))
        .unwrap_or(0.0);

    let explanation = explain_country(&snapshot.country, &components, total);

    ScoreBreakdown {
        country: snapshot.country.clone(),
        total_score: total,
        components,
        raw_indicators: snapshot.clone(),
        explanation,
    }
}

/// Score every snapshot, keyed by country code.
///
/// If a country appears twice the later snapshot wins.
pub fn score_by_country(snapshots: &[RawSnapshot]) -> BTreeMap<String, ScoreBreakdown> {
    let mut out = BTreeMap::new();
    for snapshot in snapshots {
        let breakdown = score_snapshot(snapshot);
        debug!(
            country = %breakdown.country,
            total = breakdown.total_score,
            components = breakdown.components.len(),
            "scored snapshot"
        );
        if out.insert(breakdown.country.clone(), breakdown).is_some() {
            debug!(country = %snapshot.country, "duplicate snapshot, keeping the later one");
        }
    }
    out
}

fn explain_country(country: &str, components: &ComponentScores, total: f64) -> String {
    let overall = Band::classify(total).phrase(&COUNTRY_BANDS);
    let entries = components.iter().map(|(k, v)| (k.as_str(), *v));
    let drivers = select_drivers(entries, COUNTRY_DRIVERS);

    let supportive: Vec<&str> = drivers
        .supportive
        .iter()
        .map(|(k, _)| country_label(k, true))
        .collect();
    let headwinds: Vec<&str> = drivers
        .headwinds
        .iter()
        .map(|(k, _)| country_label(k, false))
        .collect();

    let mut text = headline(&format!("{country} looks"), overall, total);
    text.push_str(&driver_clauses(&supportive, &headwinds));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_scenario() -> RawSnapshot {
        let mut s = RawSnapshot::zeroed("USD");
        s.gdp_annual_growth = Some(4.0);
        s.unemployment_rate = Some(4.0);
        s.inflation_rate = Some(2.0);
        s.interest_rate = Some(5.0);
        s
    }

    #[test]
    fn usd_scenario_components_and_total() {
        let b = score_snapshot(&usd_scenario());
        assert_eq!(b.components["gdp_growth"], 1.0);
        assert_eq!(b.components["unemployment"], 1.0);
        assert_eq!(b.components["inflation"], 0.0);
        assert_eq!(b.components["interest_rate"], 0.5);
        // zero PMI readings sit far below 50
        assert_eq!(b.components["manufacturing_pmi"], -1.0);
        assert!(!b.components.contains_key("services_pmi"));

        // 1 + 1 + 0 + 0.5 + 0 + 0 + 0 + (-1) + 0 + 0 over 10 present components
        assert_eq!(b.components.len(), 10);
        assert_eq!(b.total_score, 0.15);
    }

    #[test]
    fn total_is_rounded_mean_of_components() {
        let mut s = usd_scenario();
        s.services_pmi = Some(51.7);
        s.retail_sales_mom = Some(0.33);
        s.consumer_confidence = Some(-12.3);
        let b = score_snapshot(&s);
        let m = b.components.values().sum::<f64>() / b.components.len() as f64;
        assert_eq!(b.total_score, round_to(m, 3));
    }

    #[test]
    fn empty_snapshot_scores_zero() {
        let b = score_snapshot(&RawSnapshot::empty("XXX"));
        assert!(b.components.is_empty());
        assert_eq!(b.total_score, 0.0);
        assert_eq!(b.explanation, "XXX looks roughly neutral (score 0.00).");
    }

    #[test]
    fn nan_readings_are_excluded_not_zeroed() {
        let mut s = RawSnapshot::empty("EUR");
        s.gdp_annual_growth = Some(f64::NAN);
        s.interest_rate = Some(8.0);
        let b = score_snapshot(&s);
        assert_eq!(b.components.len(), 1);
        assert_eq!(b.total_score, 0.8);
    }

    #[test]
    fn absent_services_pmi_only_uses_remaining_components() {
        let mut with = usd_scenario();
        with.services_pmi = Some(60.0);
        let without = usd_scenario();

        let a = score_snapshot(&with);
        let b = score_snapshot(&without);
        assert_eq!(a.components.len(), b.components.len() + 1);
        assert_eq!(a.total_score, round_to(2.5 / 11.0, 3));
        assert_eq!(b.total_score, 0.15);
    }

    #[test]
    fn explanation_lists_drivers_deterministically() {
        let b = score_snapshot(&usd_scenario());
        assert_eq!(
            b.explanation,
            "USD looks slightly positive (score 0.15). \
             Supportive factors include GDP growth, low unemployment and interest rate level. \
             Headwinds come from manufacturing PMI."
        );
    }

    #[test]
    fn later_duplicate_wins() {
        let mut first = RawSnapshot::empty("GBP");
        first.interest_rate = Some(1.0);
        let mut second = RawSnapshot::empty("GBP");
        second.interest_rate = Some(5.0);

        let map = score_by_country(&[first, second]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["GBP"].total_score, 0.5);
    }
}
