//! Error types.
//!
//! - `SentimentError`: typed failures raised by the scoring engine and snapshot sources.
//! - `AppError`: what the `ms` binary surfaces (message + process exit code).

use thiserror::Error;

/// Which side of a pair query could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSide {
    Base,
    Quote,
    Both,
}

impl MissingSide {
    /// Resolve from per-side presence flags; `None` when both sides exist.
    pub fn from_presence(base_present: bool, quote_present: bool) -> Option<Self> {
        match (base_present, quote_present) {
            (true, true) => None,
            (false, true) => Some(MissingSide::Base),
            (true, false) => Some(MissingSide::Quote),
            (false, false) => Some(MissingSide::Both),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SentimentError {
    /// The snapshot collaborator could not produce data (I/O, HTTP or parse failure).
    #[error("snapshot source '{source_name}' unavailable: {reason}")]
    SourceUnavailable {
        source_name: String,
        reason: String,
    },

    /// A pair query referenced a country with no computed breakdown.
    #[error("{}", missing_country_message(.base, .quote, .side))]
    MissingCountry {
        base: String,
        quote: String,
        side: MissingSide,
    },
}

impl SentimentError {
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SentimentError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

fn missing_country_message(base: &str, quote: &str, side: &MissingSide) -> String {
    match side {
        MissingSide::Base => format!("missing macro score for base {base}"),
        MissingSide::Quote => format!("missing macro score for quote {quote}"),
        MissingSide::Both => format!("missing macro scores for base {base} and quote {quote}"),
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SentimentError> for AppError {
    fn from(err: SentimentError) -> Self {
        let exit_code = match err {
            SentimentError::SourceUnavailable { .. } => 4,
            SentimentError::MissingCountry { .. } => 3,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_country_names_the_absent_side() {
        let err = SentimentError::MissingCountry {
            base: "GBP".to_string(),
            quote: "XXX".to_string(),
            side: MissingSide::Quote,
        };
        assert_eq!(err.to_string(), "missing macro score for quote XXX");

        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 3);
    }

    #[test]
    fn presence_flags_resolve_to_side() {
        assert_eq!(MissingSide::from_presence(true, true), None);
        let base_only_missing = MissingSide::from_presence(false, true);
        assert_eq!(base_only_missing, Some(MissingSide::Base));
        let both_missing = MissingSide::from_presence(false, false);
        assert_eq!(both_missing, Some(MissingSide::Both));
    }

    #[test]
    fn source_failures_exit_with_upstream_code() {
        let app: AppError = SentimentError::source_unavailable("file", "boom").into();
        assert_eq!(app.exit_code(), 4);
        assert!(app.to_string().contains("boom"));
    }
}
