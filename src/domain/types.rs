//! Shared domain types.
//!
//! These types are kept flat and serializable so they can be:
//!
//! - decoded from the legacy macro snapshot JSON (TradingEconomics category keys)
//! - handed between the scoring stages without back-references
//! - exported as JSON without any extra mapping layer

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Normalized component scores keyed by indicator (or asset-theme) name.
///
/// Values are bounded to `[-1, 1]`. A key is present only when the underlying
/// data was usable; absence is never encoded as zero.
pub type ComponentScores = BTreeMap<String, f64>;

/// One country's latest raw indicator readings.
///
/// Field names on the wire are the TradingEconomics category names, including
/// the trailing spaces some of them carry in the legacy snapshot files.
///
/// Every indicator is optional. Decoding rules:
/// - numbers and numeric strings are present
/// - `null`, blank or unparseable strings are absent
/// - a missing key is `Some(0.0)`, except for Services PMI which stays absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "GDP Growth Rate")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub gdp_growth_qoq: Option<f64>,
    #[serde(rename = "GDP Annual Growth Rate")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub gdp_annual_growth: Option<f64>,
    #[serde(rename = "Unemployment Rate")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub unemployment_rate: Option<f64>,
    #[serde(rename = "Inflation Rate")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub inflation_rate: Option<f64>,
    #[serde(rename = "Inflation Rate MoM ")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub inflation_rate_mom: Option<f64>,
    #[serde(rename = "Interest Rate")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub interest_rate: Option<f64>,
    #[serde(rename = "Balance of Trade ")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub balance_of_trade: Option<f64>,
    #[serde(rename = "Current Account")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub current_account: Option<f64>,
    #[serde(rename = "Business Confidence ")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub business_confidence: Option<f64>,
    #[serde(rename = "Manufacturing PMI")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub manufacturing_pmi: Option<f64>,
    #[serde(rename = "Services PMI")]
    #[serde(default, deserialize_with = "lenient_reading")]
    pub services_pmi: Option<f64>,
    #[serde(rename = "Consumer Confidence ")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub consumer_confidence: Option<f64>,
    #[serde(rename = "Retail Sales MoM ")]
    #[serde(default = "zero_reading")]
    #[serde(deserialize_with = "lenient_reading")]
    pub retail_sales_mom: Option<f64>,
}

impl RawSnapshot {
    /// A snapshot with every indicator absent.
    pub fn empty(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            gdp_growth_qoq: None,
            gdp_annual_growth: None,
            unemployment_rate: None,
            inflation_rate: None,
            inflation_rate_mom: None,
            interest_rate: None,
            balance_of_trade: None,
            current_account: None,
            business_confidence: None,
            manufacturing_pmi: None,
            services_pmi: None,
            consumer_confidence: None,
            retail_sales_mom: None,
        }
    }

    /// A snapshot with every indicator present and zero except Services PMI.
    ///
    /// This is what a legacy file row with only a `Country` key decodes to.
    pub fn zeroed(country: impl Into<String>) -> Self {
        let mut s = Self::empty(country);
        for field in RawField::ALL {
            if field != RawField::ServicesPmi {
                s.set(field, Some(0.0));
            }
        }
        s
    }

    pub fn get(&self, field: RawField) -> Option<f64> {
        match field {
            RawField::GdpGrowthQoq => self.gdp_growth_qoq,
            RawField::GdpAnnualGrowth => self.gdp_annual_growth,
            RawField::UnemploymentRate => self.unemployment_rate,
            RawField::InflationRate => self.inflation_rate,
            RawField::InflationRateMom => self.inflation_rate_mom,
            RawField::InterestRate => self.interest_rate,
            RawField::BalanceOfTrade => self.balance_of_trade,
            RawField::CurrentAccount => self.current_account,
            RawField::BusinessConfidence => self.business_confidence,
            RawField::ManufacturingPmi => self.manufacturing_pmi,
            RawField::ServicesPmi => self.services_pmi,
            RawField::ConsumerConfidence => self.consumer_confidence,
            RawField::RetailSalesMom => self.retail_sales_mom,
        }
    }

    pub fn set(&mut self, field: RawField, value: Option<f64>) {
        let slot = match field {
            RawField::GdpGrowthQoq => &mut self.gdp_growth_qoq,
            RawField::GdpAnnualGrowth => &mut self.gdp_annual_growth,
            RawField::UnemploymentRate => &mut self.unemployment_rate,
            RawField::InflationRate => &mut self.inflation_rate,
            RawField::InflationRateMom => &mut self.inflation_rate_mom,
            RawField::InterestRate => &mut self.interest_rate,
            RawField::BalanceOfTrade => &mut self.balance_of_trade,
            RawField::CurrentAccount => &mut self.current_account,
            RawField::BusinessConfidence => &mut self.business_confidence,
            RawField::ManufacturingPmi => &mut self.manufacturing_pmi,
            RawField::ServicesPmi => &mut self.services_pmi,
            RawField::ConsumerConfidence => &mut self.consumer_confidence,
            RawField::RetailSalesMom => &mut self.retail_sales_mom,
        };
        *slot = value;
    }
}

/// Raw snapshot fields, named after their TradingEconomics category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawField {
    GdpGrowthQoq,
    GdpAnnualGrowth,
    UnemploymentRate,
    InflationRate,
    InflationRateMom,
    InterestRate,
    BalanceOfTrade,
    CurrentAccount,
    BusinessConfidence,
    ManufacturingPmi,
    ServicesPmi,
    ConsumerConfidence,
    RetailSalesMom,
}

impl RawField {
    pub const ALL: [RawField; 13] = [
        RawField::GdpGrowthQoq,
        RawField::GdpAnnualGrowth,
        RawField::UnemploymentRate,
        RawField::InflationRate,
        RawField::InflationRateMom,
        RawField::InterestRate,
        RawField::BalanceOfTrade,
        RawField::CurrentAccount,
        RawField::BusinessConfidence,
        RawField::ManufacturingPmi,
        RawField::ServicesPmi,
        RawField::ConsumerConfidence,
        RawField::RetailSalesMom,
    ];

    /// Category name as published by TradingEconomics (no trailing whitespace).
    pub fn category(self) -> &'static str {
        match self {
            RawField::GdpGrowthQoq => "GDP Growth Rate",
            RawField::GdpAnnualGrowth => "GDP Annual Growth Rate",
            RawField::UnemploymentRate => "Unemployment Rate",
            RawField::InflationRate => "Inflation Rate",
            RawField::InflationRateMom => "Inflation Rate MoM",
            RawField::InterestRate => "Interest Rate",
            RawField::BalanceOfTrade => "Balance of Trade",
            RawField::CurrentAccount => "Current Account",
            RawField::BusinessConfidence => "Business Confidence",
            RawField::ManufacturingPmi => "Manufacturing PMI",
            RawField::ServicesPmi => "Services PMI",
            RawField::ConsumerConfidence => "Consumer Confidence",
            RawField::RetailSalesMom => "Retail Sales MoM",
        }
    }

    /// Match a category name, ignoring surrounding whitespace and case.
    pub fn from_category(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.category().eq_ignore_ascii_case(name))
    }
}

/// The scored macro indicators (component keys of a country breakdown).
///
/// `GDP Growth Rate` (q/q) and `Inflation Rate MoM` are carried in the raw
/// snapshot but are not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    GdpGrowth,
    Unemployment,
    Inflation,
    InterestRate,
    CurrentAccount,
    BalanceOfTrade,
    BusinessConfidence,
    ManufacturingPmi,
    ServicesPmi,
    ConsumerConfidence,
    RetailSalesMom,
}

impl Indicator {
    pub const ALL: [Indicator; 11] = [
        Indicator::GdpGrowth,
        Indicator::Unemployment,
        Indicator::Inflation,
        Indicator::InterestRate,
        Indicator::CurrentAccount,
        Indicator::BalanceOfTrade,
        Indicator::BusinessConfidence,
        Indicator::ManufacturingPmi,
        Indicator::ServicesPmi,
        Indicator::ConsumerConfidence,
        Indicator::RetailSalesMom,
    ];

    /// Component key used in `ComponentScores`.
    pub fn key(self) -> &'static str {
        match self {
            Indicator::GdpGrowth => "gdp_growth",
            Indicator::Unemployment => "unemployment",
            Indicator::Inflation => "inflation",
            Indicator::InterestRate => "interest_rate",
            Indicator::CurrentAccount => "current_account",
            Indicator::BalanceOfTrade => "balance_of_trade",
            Indicator::BusinessConfidence => "business_confidence",
            Indicator::ManufacturingPmi => "manufacturing_pmi",
            Indicator::ServicesPmi => "services_pmi",
            Indicator::ConsumerConfidence => "consumer_confidence",
            Indicator::RetailSalesMom => "retail_sales_mom",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.key() == key)
    }

    /// Raw field feeding this indicator.
    pub fn source_field(self) -> RawField {
        match self {
            Indicator::GdpGrowth => RawField::GdpAnnualGrowth,
            Indicator::Unemployment => RawField::UnemploymentRate,
            Indicator::Inflation => RawField::InflationRate,
            Indicator::InterestRate => RawField::InterestRate,
            Indicator::CurrentAccount => RawField::CurrentAccount,
            Indicator::BalanceOfTrade => RawField::BalanceOfTrade,
            Indicator::BusinessConfidence => RawField::BusinessConfidence,
            Indicator::ManufacturingPmi => RawField::ManufacturingPmi,
            Indicator::ServicesPmi => RawField::ServicesPmi,
            Indicator::ConsumerConfidence => RawField::ConsumerConfidence,
            Indicator::RetailSalesMom => RawField::RetailSalesMom,
        }
    }
}

/// A country's aggregate score, its components and the generated rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub country: String,
    pub total_score: f64,
    pub components: ComponentScores,
    pub raw_indicators: RawSnapshot,
    pub explanation: String,
}

impl ScoreBreakdown {
    pub fn component(&self, indicator: Indicator) -> Option<f64> {
        self.components.get(indicator.key()).copied()
    }
}

/// Relative sentiment of a base country/currency against a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSentiment {
    pub base: String,
    pub quote: String,
    pub base_score: f64,
    pub quote_score: f64,
    pub pair_score: f64,
    pub base_details: ScoreBreakdown,
    pub quote_details: ScoreBreakdown,
    pub explanation: String,
}

/// Asset class of a tradable instrument; selects the projection rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Index,
    Metal,
    /// Anything else mirrors the base country's total score.
    Other,
}

impl AssetClass {
    pub fn display_name(self) -> &'static str {
        match self {
            AssetClass::Index => "index",
            AssetClass::Metal => "metal",
            AssetClass::Other => "other",
        }
    }
}

/// Static instrument definition: which country's macro picture drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentDef {
    pub symbol: &'static str,
    pub name: &'static str,
    pub asset_class: AssetClass,
    pub base: &'static str,
}

/// Derived instrument score. Components here are asset themes, not indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentScore {
    pub symbol: String,
    #[serde(rename = "asset_type")]
    pub asset_class: AssetClass,
    pub total_score: f64,
    pub components: ComponentScores,
    pub explanation: String,
}

fn zero_reading() -> Option<f64> {
    Some(0.0)
}

fn lenient_reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(reading_from_value(&value))
}

/// Interpret a JSON value as an indicator reading.
pub fn reading_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_reading(s),
        _ => None,
    }
}

/// Parse a textual reading; blank or non-numeric text is absent.
pub fn parse_reading(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
