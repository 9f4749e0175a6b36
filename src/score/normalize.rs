//! Indicator-specific transforms into the unit interval.

use crate::domain::{ComponentScores, Indicator, RawSnapshot};
use crate::math::clamp_unit;

/// Inflation target the inflation component is centred on (percent).
pub const INFLATION_TARGET: f64 = 2.0;

/// PMI reading that separates expansion from contraction.
pub const PMI_NEUTRAL: f64 = 50.0;

/// Map a raw reading to its component value, clamped to `[-1, 1]`.
pub fn normalize(indicator: Indicator, value: f64) -> f64 {
    let scaled = match indicator {
        // -4% -> -1, 4% -> 1
        Indicator::GdpGrowth => value / 4.0,
        // 4% -> 1, 10% -> 0, above 10% negative
        Indicator::Unemployment => (10.0 - value) / 6.0,
        // penalize distance from target; +/-6pp saturates
        Indicator::Inflation => -(value - INFLATION_TARGET) / 6.0,
        Indicator::InterestRate => value / 10.0,
        Indicator::CurrentAccount => value / 100_000.0,
        Indicator::BalanceOfTrade => value / 50_000.0,
        Indicator::BusinessConfidence | Indicator::ConsumerConfidence => value / 100.0,
        Indicator::ManufacturingPmi | Indicator::ServicesPmi => (value - PMI_NEUTRAL) / 10.0,
        // +/-2% saturates
        Indicator::RetailSalesMom => value / 2.0,
    };
    clamp_unit(scaled)
}

/// Normalize every present reading of a snapshot.
///
/// Absent readings produce no key. Components are not rounded here.
pub fn normalize_snapshot(snapshot: &RawSnapshot) -> ComponentScores {
    Indicator::ALL
        .into_iter()
        .filter_map(|indicator| {
            let raw = snapshot.get(indicator.source_field())?;
            Some((indicator.key().to_string(), normalize(indicator, raw)))
        })
        .collect()
}
