//! Environment configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. CLI flags override them in `app`.

use std::path::PathBuf;

use crate::data::tradingeconomics::DEFAULT_BASE_URL;
use crate::error::AppError;

pub const DEFAULT_MACRO_FILE: &str = "data/macro.json";

const MISSING_TE_KEY: &str =
    "Missing TE_KEY in environment (.env); required for TradingEconomics.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Snapshot file read by the file source (`MACRO_FILE`).
    pub macro_file: PathBuf,
    /// TradingEconomics API key (`TE_KEY`), only needed for remote fetches.
    pub te_key: Option<String>,
    /// TradingEconomics API root (`TE_BASE_URL`).
    pub te_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            let value = lookup(key)?;
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Self {
            macro_file: get("MACRO_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MACRO_FILE)),
            te_key: get("TE_KEY"),
            te_base_url: get("TE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn require_te_key(&self) -> Result<&str, AppError> {
        self.te_key
            .as_deref()
            .ok_or_else(|| AppError::new(2, MISSING_TE_KEY))
    }
}
