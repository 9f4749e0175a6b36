//! Static, read-only reference data.
//!
//! Both tables are plain `&'static` slices: built at compile time, never mutated,
//! shared freely between concurrent callers.

use crate::domain::{AssetClass, InstrumentDef};

/// Instruments scored by default and the country whose macro picture drives each.
///
/// The metal entries assume a USD base: their `usd_weakness_theme` inverts the
/// base total, which only reads as "dollar weakness" when the base is USD.
pub const INSTRUMENTS: &[InstrumentDef] = &[
    InstrumentDef {
        symbol: "US500",
        name: "S&P 500",
        asset_class: AssetClass::Index,
        base: "USD",
    },
    InstrumentDef {
        symbol: "US100",
        name: "Nasdaq 100",
        asset_class: AssetClass::Index,
        base: "USD",
    },
    InstrumentDef {
        symbol: "JP225",
        name: "Nikkei 225",
        asset_class: AssetClass::Index,
        base: "JPY",
    },
    InstrumentDef {
        symbol: "XAUUSD",
        name: "Gold",
        asset_class: AssetClass::Metal,
        base: "USD",
    },
    InstrumentDef {
        symbol: "XAGUSD",
        name: "Silver",
        asset_class: AssetClass::Metal,
        base: "USD",
    },
];

/// A tracked currency and the TradingEconomics country that publishes its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub te_country: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "USD",
        name: "US Dollar",
        te_country: "united states",
    },
    Currency {
        code: "EUR",
        name: "Euro",
        te_country: "euro area",
    },
    Currency {
        code: "GBP",
        name: "British Pound",
        te_country: "united kingdom",
    },
    Currency {
        code: "JPY",
        name: "Japanese Yen",
        te_country: "japan",
    },
    Currency {
        code: "AUD",
        name: "Australian Dollar",
        te_country: "australia",
    },
    Currency {
        code: "NZD",
        name: "New Zealand Dollar",
        te_country: "new zealand",
    },
    Currency {
        code: "CHF",
        name: "Swiss Franc",
        te_country: "switzerland",
    },
];

pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}
