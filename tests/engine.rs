//! End-to-end checks of the scoring engine through the public API.

use std::collections::BTreeMap;

use macro_sentiment::data::{JsonFileSource, SnapshotSource, StaticSource};
use macro_sentiment::domain::{INSTRUMENTS, Indicator, RawSnapshot, ScoreBreakdown};
use macro_sentiment::error::{MissingSide, SentimentError};
use macro_sentiment::math::round_to;
use macro_sentiment::score::{derive_instrument_scores, derive_sentiment, score_by_country};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_file() -> JsonFileSource {
    JsonFileSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/macro.json"))
}

fn sample_breakdowns() -> BTreeMap<String, ScoreBreakdown> {
    let snapshots = sample_file().load().expect("sample snapshot file loads");
    score_by_country(&snapshots)
}

fn random_snapshot(rng: &mut StdRng, code: &str) -> RawSnapshot {
    let mut s = RawSnapshot::empty(code);
    s.gdp_annual_growth = Some(rng.gen_range(-20.0..20.0));
    s.unemployment_rate = Some(rng.gen_range(0.0..40.0));
    s.inflation_rate = Some(rng.gen_range(-10.0..60.0));
    s.interest_rate = Some(rng.gen_range(-2.0..40.0));
    s.current_account = Some(rng.gen_range(-1.0e6..1.0e6));
    s.balance_of_trade = Some(rng.gen_range(-5.0e5..5.0e5));
    s.business_confidence = Some(rng.gen_range(-200.0..200.0));
    s.manufacturing_pmi = Some(rng.gen_range(0.0..100.0));
    s.services_pmi = if rng.gen_bool(0.5) {
        Some(rng.gen_range(0.0..100.0))
    } else {
        None
    };
    s.consumer_confidence = Some(rng.gen_range(-200.0..200.0));
    s.retail_sales_mom = Some(rng.gen_range(-10.0..10.0));
    s
}

#[test]
fn sample_file_scores_every_country() {
    let map = sample_breakdowns();
    assert_eq!(map.len(), 7);
    assert!(!map["GBP"].components.contains_key("services_pmi"));
    assert!(map["USD"].components.contains_key("services_pmi"));
    for b in map.values() {
        assert!(b.explanation.starts_with(&format!("{} looks", b.country)));
    }
}

#[test]
fn random_snapshots_keep_components_bounded_and_totals_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..500 {
        let snapshot = random_snapshot(&mut rng, &format!("C{i:03}"));
        let map = score_by_country(std::slice::from_ref(&snapshot));
        let b = &map[&snapshot.country];

        for (key, value) in &b.components {
            assert!((-1.0..=1.0).contains(value), "{key} = {value}");
        }
        let m = b.components.values().sum::<f64>() / b.components.len() as f64;
        assert_eq!(b.total_score, round_to(m, 3));
        let has_services = b.components.contains_key("services_pmi");
        assert_eq!(has_services, snapshot.services_pmi.is_some());
    }
}

#[test]
fn pair_scores_are_antisymmetric_across_sample() {
    let map = sample_breakdowns();
    let codes: Vec<&String> = map.keys().collect();
    for a in &codes {
        for b in &codes {
            let ab = derive_sentiment(&map, a, b).unwrap();
            let ba = derive_sentiment(&map, b, a).unwrap();
            assert_eq!(ab.pair_score, -ba.pair_score, "{a}/{b}");
        }
    }
}

#[test]
fn gbp_usd_pair_matches_totals_and_names_both() {
    let map = sample_breakdowns();
    let pair = derive_sentiment(&map, "GBP", "USD").unwrap();
    let diff = map["GBP"].total_score - map["USD"].total_score;
    assert_eq!(pair.pair_score, round_to(diff, 3));
    assert!(!pair.explanation.is_empty());
    assert!(pair.explanation.contains("GBP"));
    assert!(pair.explanation.contains("USD"));
}

#[test]
fn unknown_quote_fails_without_partial_result() {
    let map = sample_breakdowns();
    match derive_sentiment(&map, "GBP", "XXX") {
        Err(SentimentError::MissingCountry { side, .. }) => assert_eq!(side, MissingSide::Quote),
        other => panic!("expected a missing quote, got {other:?}"),
    }
}

#[test]
fn dropping_a_base_country_drops_exactly_its_instrument() {
    let mut map = sample_breakdowns();
    let before = derive_instrument_scores(&map, INSTRUMENTS);
    assert_eq!(before.len(), INSTRUMENTS.len());

    map.remove("JPY");
    let after = derive_instrument_scores(&map, INSTRUMENTS);
    assert_eq!(after.len(), before.len() - 1);
    assert!(!after.contains_key("JP225"));
}

#[test]
fn repeated_runs_produce_identical_text() {
    let source = StaticSource::new(sample_file().load().unwrap());
    let first = score_by_country(&source.load().unwrap());
    let second = score_by_country(&source.load().unwrap());
    assert_eq!(first, second);

    let a = derive_instrument_scores(&first, INSTRUMENTS);
    let b = derive_instrument_scores(&second, INSTRUMENTS);
    assert_eq!(a, b);
}

#[test]
fn usd_scenario_from_json() {
    let json = r#"[{
        "Country": "USD",
        "GDP Annual Growth Rate": 4,
        "Unemployment Rate": 4,
        "Inflation Rate": 2,
        "Interest Rate": 5
    }]"#;
    let snapshots: Vec<RawSnapshot> = serde_json::from_str(json).unwrap();
    let map = score_by_country(&snapshots);
    let usd = &map["USD"];

    assert_eq!(usd.component(Indicator::GdpGrowth), Some(1.0));
    assert_eq!(usd.component(Indicator::Unemployment), Some(1.0));
    assert_eq!(usd.component(Indicator::Inflation), Some(0.0));
    assert_eq!(usd.component(Indicator::InterestRate), Some(0.5));
    assert_eq!(usd.component(Indicator::ServicesPmi), None);

    let m = usd.components.values().sum::<f64>() / usd.components.len() as f64;
    assert_eq!(usd.total_score, round_to(m, 3));
}

#[test]
fn breakdowns_serialize_with_stable_field_names() {
    let map = sample_breakdowns();
    let value = serde_json::to_value(&map["USD"]).unwrap();
    let fields = [
        "country",
        "total_score",
        "components",
        "raw_indicators",
        "explanation",
    ];
    for field in fields {
        assert!(value.get(field).is_some(), "missing {field}");
    }
    assert_eq!(value["raw_indicators"]["Country"], "USD");

    let instruments = derive_instrument_scores(&map, INSTRUMENTS);
    let value = serde_json::to_value(&instruments["XAUUSD"]).unwrap();
    assert_eq!(value["asset_type"], "metal");
}
