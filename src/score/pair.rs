//! Relative (base vs quote) sentiment for a currency pair.

use std::collections::BTreeMap;

use crate::domain::{PairSentiment, ScoreBreakdown};
use crate::error::{MissingSide, SentimentError};
use crate::math::round_to;
use crate::score::SCORE_DECIMALS;
use crate::score::explain::{
    Band, PAIR_BANDS, PAIR_DRIVERS, join_with_and, pair_label, select_drivers,
};

/// Derive pair sentiment from precomputed country breakdowns.
///
/// Both codes must be present in `breakdowns`; otherwise the error names the
/// missing side(s) and no partial result is produced.
pub fn derive_sentiment(
    breakdowns: &BTreeMap<String, ScoreBreakdown>,
    base: &str,
    quote: &str,
) -> Result<PairSentiment, SentimentError> {
    let base_details = breakdowns.get(base);
    let quote_details = breakdowns.get(quote);

    let (base_details, quote_details) = match (base_details, quote_details) {
        (Some(b), Some(q)) => (b, q),
        (b, q) => {
            let side = MissingSide::from_presence(b.is_some(), q.is_some());
            return Err(SentimentError::MissingCountry {
                base: base.to_string(),
                quote: quote.to_string(),
                side: side.unwrap_or(MissingSide::Both),
            });
        }
    };

    let diff = base_details.total_score - quote_details.total_score;
    let pair_score = round_to(diff, SCORE_DECIMALS);
    let explanation = explain_pair(base_details, quote_details, pair_score);

    Ok(PairSentiment {
        base: base.to_string(),
        quote: quote.to_string(),
        base_score: base_details.total_score,
        quote_score: quote_details.total_score,
        pair_score,
        base_details: base_details.clone(),
        quote_details: quote_details.clone(),
        explanation,
    })
}

/// Per-component `base - quote` for keys present on both sides.
pub fn component_edges(base: &ScoreBreakdown, quote: &ScoreBreakdown) -> BTreeMap<String, f64> {
    base.components
        .iter()
        .filter_map(|(key, bv)| {
            let qv = quote.components.get(key)?;
            Some((key.clone(), round_to(bv - qv, SCORE_DECIMALS)))
        })
        .collect()
}

fn explain_pair(base: &ScoreBreakdown, quote: &ScoreBreakdown, pair_score: f64) -> String {
    let bias = Band::classify(pair_score).phrase(&PAIR_BANDS);
    let mut text = format!(
        "{} looks {bias} {} on macro fundamentals (pair score {pair_score:.2}).",
        base.country, quote.country
    );

    let edges = component_edges(base, quote);
    let entries = edges.iter().map(|(k, v)| (k.as_str(), *v));
    let drivers = select_drivers(entries, PAIR_DRIVERS);

    let favour_base: Vec<&str> = drivers
        .supportive
        .iter()
        .map(|(k, _)| pair_label(k, true))
        .collect();
    let favour_quote: Vec<&str> = drivers
        .headwinds
        .iter()
        .map(|(k, _)| pair_label(k, false))
        .collect();

    if !favour_base.is_empty() {
        let list = join_with_and(&favour_base);
        text.push_str(&format!(" Favouring {} are {list}.", base.country));
    }
    if !favour_quote.is_empty() {
        let list = join_with_and(&favour_quote);
        text.push_str(&format!(
            " In contrast, {} looks better in terms of {list}.",
            quote.country
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawSnapshot;
    use crate::score::score_by_country;

    fn breakdowns() -> BTreeMap<String, ScoreBreakdown> {
        let mut usd = RawSnapshot::empty("USD");
        usd.gdp_annual_growth = Some(3.0);
        usd.unemployment_rate = Some(4.0);
        usd.interest_rate = Some(5.0);
        usd.inflation_rate = Some(3.0);

        let mut gbp = RawSnapshot::empty("GBP");
        gbp.gdp_annual_growth = Some(0.4);
        gbp.unemployment_rate = Some(4.6);
        gbp.interest_rate = Some(5.25);
        gbp.inflation_rate = Some(2.0);

        score_by_country(&[usd, gbp])
    }

    #[test]
    fn pair_score_is_difference_of_totals() {
        let map = breakdowns();
        let pair = derive_sentiment(&map, "GBP", "USD").unwrap();
        let diff = map["GBP"].total_score - map["USD"].total_score;
        assert_eq!(pair.pair_score, round_to(diff, 3));
        assert_eq!(pair.base_score, map["GBP"].total_score);
        assert_eq!(pair.quote_details, map["USD"]);
        assert!(pair.explanation.contains("GBP"));
        assert!(pair.explanation.contains("USD"));
    }

    #[test]
    fn pair_score_is_antisymmetric() {
        let map = breakdowns();
        let ab = derive_sentiment(&map, "GBP", "USD").unwrap();
        let ba = derive_sentiment(&map, "USD", "GBP").unwrap();
        assert_eq!(ab.pair_score, -ba.pair_score);
    }

    #[test]
    fn missing_quote_is_an_error() {
        let err = derive_sentiment(&breakdowns(), "GBP", "XXX").unwrap_err();
        assert_eq!(
            err,
            SentimentError::MissingCountry {
                base: "GBP".to_string(),
                quote: "XXX".to_string(),
                side: MissingSide::Quote,
            }
        );
    }

    #[test]
    fn missing_both_sides_names_both() {
        let err = derive_sentiment(&breakdowns(), "AAA", "BBB").unwrap_err();
        match err {
            SentimentError::MissingCountry { side, .. } => assert_eq!(side, MissingSide::Both),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn comparative_drivers_name_each_side() {
        let pair = derive_sentiment(&breakdowns(), "USD", "GBP").unwrap();
        // edges: gdp 0.65, unemployment 0.1, rates -0.025, inflation -0.167
        assert_eq!(
            pair.explanation,
            "USD looks stronger than GBP on macro fundamentals (pair score 0.14). \
             Favouring USD are stronger GDP growth."
        );

        let reverse = derive_sentiment(&breakdowns(), "GBP", "USD").unwrap();
        let tail = " In contrast, USD looks better in terms of GDP growth.";
        assert!(reverse.explanation.ends_with(tail));
    }

    fn breakdown(country: &str, total: f64, components: &[(&str, f64)]) -> ScoreBreakdown {
        let components = components
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        ScoreBreakdown {
            country: country.to_string(),
            total_score: total,
            components,
            raw_indicators: RawSnapshot::empty(country),
            explanation: String::new(),
        }
    }

    #[test]
    fn comparison_keeps_two_strongest_edges_per_side() {
        let aaa = breakdown(
            "AAA",
            0.25,
            &[
                ("gdp_growth", 0.5),
                ("unemployment", 0.5),
                ("interest_rate", 0.2),
                ("manufacturing_pmi", 0.0),
                ("consumer_confidence", 0.0),
                ("business_confidence", 0.0),
            ],
        );
        let bbb = breakdown(
            "BBB",
            0.05,
            &[
                ("gdp_growth", 0.0),
                ("unemployment", 0.0),
                ("interest_rate", 0.0),
                ("manufacturing_pmi", 0.5),
                ("consumer_confidence", 0.3),
                ("business_confidence", 0.2),
            ],
        );
        let map = BTreeMap::from([("AAA".to_string(), aaa), ("BBB".to_string(), bbb)]);

        let pair = derive_sentiment(&map, "AAA", "BBB").unwrap();
        assert_eq!(
            pair.explanation,
            "AAA looks stronger than BBB on macro fundamentals (pair score 0.20). \
             Favouring AAA are stronger GDP growth and lower unemployment. \
             In contrast, BBB looks better in terms of manufacturing PMI and consumer confidence."
        );
    }

    #[test]
    fn edge_of_exactly_the_threshold_is_a_driver() {
        let ccc = breakdown("CCC", 0.45, &[("interest_rate", 0.45)]);
        let ddd = breakdown("DDD", 0.25, &[("interest_rate", 0.25)]);
        let eee = breakdown("EEE", 0.26, &[("interest_rate", 0.26)]);
        let map = BTreeMap::from([
            ("CCC".to_string(), ccc),
            ("DDD".to_string(), ddd),
            ("EEE".to_string(), eee),
        ]);

        let at = derive_sentiment(&map, "CCC", "DDD").unwrap();
        assert_eq!(
            at.explanation,
            "CCC looks stronger than DDD on macro fundamentals (pair score 0.20). \
             Favouring CCC are higher interest rates."
        );

        let below = derive_sentiment(&map, "CCC", "EEE").unwrap();
        assert_eq!(
            below.explanation,
            "CCC looks stronger than EEE on macro fundamentals (pair score 0.19)."
        );
    }
}
