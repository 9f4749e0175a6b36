//! Projection of country breakdowns onto tradable instruments.
//!
//! Each instrument takes the breakdown of its base country and re-weights it
//! into asset-class themes. The theme set differs from the country component
//! set, so instrument totals are means over the themes only.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{
    AssetClass, ComponentScores, Indicator, InstrumentDef, InstrumentScore, ScoreBreakdown,
};
use crate::math::{mean, round_to};
use crate::score::SCORE_DECIMALS;
use crate::score::explain::{
    Band, INSTRUMENT_BANDS, INSTRUMENT_DRIVERS, join_with_and, select_drivers,
};

/// Score every instrument in `table` whose base country has a breakdown.
///
/// Instruments with no base breakdown are left out of the result; this is not
/// an error (unlike pair queries, which fail on a missing country).
pub fn derive_instrument_scores(
    breakdowns: &BTreeMap<String, ScoreBreakdown>,
    table: &[InstrumentDef],
) -> BTreeMap<String, InstrumentScore> {
    table
        .iter()
        .filter_map(|def| {
            let Some(base) = breakdowns.get(def.base) else {
                debug!(
                    symbol = def.symbol,
                    base = def.base,
                    "no base breakdown, skipping instrument"
                );
                return None;
            };
            Some((def.symbol.to_string(), score_instrument(def, base)))
        })
        .collect()
}

/// Score one instrument against its base breakdown.
pub fn score_instrument(def: &InstrumentDef, base: &ScoreBreakdown) -> InstrumentScore {
    let components = project_components(def.asset_class, base);
    let total = mean(components.values().copied())
        .map(|m| round_to(m, SCORE_DECIMALS))
        .unwrap_or(0.0);
    let explanation = explain_instrument(def, base, &components, total);

    InstrumentScore {
        symbol: def.symbol.to_string(),
        asset_class: def.asset_class,
        total_score: total,
        components,
        explanation,
    }
}

/// Asset-class themes derived from the base breakdown.
///
/// A theme built from a single absent country component is omitted.
pub fn project_components(asset_class: AssetClass, base: &ScoreBreakdown) -> ComponentScores {
    let c = |indicator: Indicator| base.component(indicator);
    let inflation = c(Indicator::Inflation);
    let rate = c(Indicator::InterestRate);
    let mut comps = ComponentScores::new();
    let mut put = |key: &str, value: Option<f64>| {
        if let Some(v) = value.filter(|v| !v.is_nan()) {
            comps.insert(key.to_string(), round_to(v, SCORE_DECIMALS));
        }
    };

    match asset_class {
        AssetClass::Index => {
            // Equity indices like growth, confidence and PMIs; dislike high rates
            // and inflation far from target in either direction.
            let confidence = mean_non_zero(&[
                c(Indicator::BusinessConfidence),
                c(Indicator::ManufacturingPmi),
                c(Indicator::ServicesPmi),
            ]);
            put("growth", c(Indicator::GdpGrowth));
            put("confidence", Some(confidence));
            put("employment", c(Indicator::Unemployment));
            put("rates_headwind", rate.map(|r| -r));
            put("inflation_headwind", inflation.map(|i| -i.abs()));
        }
        AssetClass::Metal => {
            put("inflation_theme", inflation.map(|i| i.max(0.0)));
            put("rates_theme", rate.map(|r| -r));
            // Inverted base total: only reads as currency weakness for a USD base.
            put("usd_weakness_theme", Some(-base.total_score));
        }
        AssetClass::Other => {
            put("macro", Some(base.total_score));
        }
    }

    comps
}

/// Mean of the inputs that are present and non-zero; `0.0` if none qualify.
///
/// Known approximation: an exact zero component is treated as "no signal" and
/// skipped, the same as an absent one.
fn mean_non_zero(values: &[Option<f64>]) -> f64 {
    mean(values.iter().flatten().copied().filter(|v| *v != 0.0)).unwrap_or(0.0)
}

fn explain_instrument(
    def: &InstrumentDef,
    base: &ScoreBreakdown,
    comps: &ComponentScores,
    total: f64,
) -> String {
    let bias = Band::classify(total).phrase(&INSTRUMENT_BANDS);
    let mut text = format!(
        "{} currently has a {bias} (score {total:.2}) based on {} macro conditions.",
        def.symbol, base.country
    );

    match def.asset_class {
        AssetClass::Index => text.push_str(&explain_index(comps)),
        AssetClass::Metal => text.push_str(&explain_metal(comps, &base.country)),
        AssetClass::Other => {}
    }
    text
}

fn explain_index(comps: &ComponentScores) -> String {
    let entries = comps.iter().map(|(k, v)| (k.as_str(), *v));
    let drivers = select_drivers(entries, INSTRUMENT_DRIVERS);
    let supportive = drivers
        .supportive
        .iter()
        .filter_map(|(k, _)| index_phrase(k, true));
    let headwinds = drivers
        .headwinds
        .iter()
        .filter_map(|(k, _)| index_phrase(k, false));
    let parts: Vec<&str> = supportive.chain(headwinds).collect();

    if parts.is_empty() {
        return " Price action is mostly reflecting a balanced macro backdrop.".to_string();
    }
    format!(" Key drivers are {}.", join_with_and(&parts))
}

fn index_phrase(key: &str, supportive: bool) -> Option<&'static str> {
    let phrase = match (key, supportive) {
        ("growth", true) => "solid GDP growth",
        ("growth", false) => "sluggish GDP growth",
        ("confidence", true) => "resilient business and services activity",
        ("confidence", false) => "soft business and services activity",
        ("employment", true) => "low unemployment",
        ("employment", false) => "elevated unemployment",
        ("rates_headwind", true) => "support from very low interest rates",
        ("rates_headwind", false) => "headwinds from high interest rates",
        ("inflation_headwind", false) => "concerns around inflation dynamics",
        _ => return None,
    };
    Some(phrase)
}

fn explain_metal(comps: &ComponentScores, base_country: &str) -> String {
    let entries = comps.iter().map(|(k, v)| (k.as_str(), *v));
    let drivers = select_drivers(entries, INSTRUMENT_DRIVERS);
    let supports: Vec<String> = drivers
        .supportive
        .iter()
        .filter_map(|(k, _)| metal_phrase(k, true, base_country))
        .collect();
    let headwinds: Vec<String> = drivers
        .headwinds
        .iter()
        .filter_map(|(k, _)| metal_phrase(k, false, base_country))
        .collect();

    let mut text = String::new();
    if !supports.is_empty() {
        let list = join_with_and(&supports);
        text.push_str(&format!(" Supportive factors include {list}."));
    }
    if !headwinds.is_empty() {
        let list = join_with_and(&headwinds);
        text.push_str(&format!(" On the other hand, {list} act as headwinds."));
    }
    if text.is_empty() {
        text.push_str(" Macro signals for this metal are mixed.");
    }
    text
}

fn metal_phrase(key: &str, supportive: bool, base_country: &str) -> Option<String> {
    let phrase = match (key, supportive) {
        // the theme is positive when inflation sits at or below target
        ("inflation_theme", true) => "inflation near or below target".to_string(),
        ("rates_theme", true) => "relatively low or easing interest rates".to_string(),
        ("rates_theme", false) => "higher interest rates".to_string(),
        ("usd_weakness_theme", true) => format!("a softer {base_country} macro backdrop"),
        ("usd_weakness_theme", false) => format!("a stronger {base_country} macro backdrop"),
        _ => return None,
    };
    Some(phrase)
}
