//! TradingEconomics API integration.
//!
//! One `/country/{name}` request per tracked currency; the returned indicator
//! list is folded into a `RawSnapshot` keyed by the currency code.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::data::SnapshotSource;
use crate::domain::{CURRENCIES, Currency, RawField, RawSnapshot};
use crate::error::SentimentError;

pub const DEFAULT_BASE_URL: &str = "https://api.tradingeconomics.com";

pub struct TradingEconomicsSource {
    client: Client,
    api_key: String,
    base_url: String,
    currencies: Vec<Currency>,
}

impl TradingEconomicsSource {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            currencies: CURRENCIES.to_vec(),
        }
    }

    /// Restrict the fetch to a subset of currencies.
    pub fn with_currencies(mut self, currencies: Vec<Currency>) -> Self {
        self.currencies = currencies;
        self
    }

    fn fetch_country(&self, currency: &Currency) -> Result<RawSnapshot, String> {
        let url = format!(
            "{}/country/{}",
            self.base_url.trim_end_matches('/'),
            currency.te_country
        );
        let resp = self
            .client
            .get(&url)
            .query(&[("c", self.api_key.as_str()), ("f", "json")])
            .send()
            .map_err(|e| format!("request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("request failed with status {}", resp.status()));
        }

        let indicators: Vec<TeIndicator> = resp
            .json()
            .map_err(|e| format!("failed to parse response: {e}"))?;

        Ok(snapshot_from_indicators(currency.code, &indicators))
    }
}

impl SnapshotSource for TradingEconomicsSource {
    fn name(&self) -> &str {
        "tradingeconomics"
    }

    fn load(&self) -> Result<Vec<RawSnapshot>, SentimentError> {
        let mut out = Vec::with_capacity(self.currencies.len());
        for currency in &self.currencies {
            info!(
                currency = currency.code,
                country = currency.te_country,
                "fetching indicators"
            );
            match self.fetch_country(currency) {
                Ok(snapshot) => out.push(snapshot),
                Err(reason) => {
                    warn!(currency = currency.code, %reason, "failed to fetch indicators");
                }
            }
        }

        if out.is_empty() {
            return Err(SentimentError::source_unavailable(
                self.name(),
                "no currency returned indicator data",
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeIndicator {
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Value", alias = "LatestValue", default)]
    pub value: Option<f64>,
    /// Publication timestamp, ISO 8601 as returned by the API.
    #[serde(rename = "DateTime", alias = "LatestValueDateTime", default)]
    pub date_time: Option<String>,
}

/// Fold an indicator list into a snapshot.
///
/// Categories that are not returned, or come back without a value, stay absent.
pub fn snapshot_from_indicators(code: &str, indicators: &[TeIndicator]) -> RawSnapshot {
    let mut snapshot = RawSnapshot::empty(code);
    for indicator in indicators {
        let Some(field) = RawField::from_category(&indicator.category) else {
            continue;
        };
        if let Some(value) = indicator.value.filter(|v| v.is_finite()) {
            snapshot.set(field, Some(value));
        }
    }
    debug!(
        currency = code,
        as_of = latest_date(indicators),
        "assembled snapshot"
    );
    snapshot
}

/// Most recent timestamp among the indicators that carry a value.
fn latest_date(indicators: &[TeIndicator]) -> Option<&str> {
    indicators
        .iter()
        .filter(|i| i.value.is_some())
        .filter_map(|i| i.date_time.as_deref())
        .max()
}
