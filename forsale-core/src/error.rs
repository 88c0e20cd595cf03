//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Errors raised at the collaborator seams (IDN codec, TXT resolver, configuration).
///
/// None of these reach callers of [`ForSaleService::check_domain`](crate::ForSaleService::check_domain);
/// the service degrades them into diagnostic strings on the result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ForsaleError {
    /// IDN conversion failed
    #[error("IDN conversion failed: {0}")]
    Idn(String),

    /// The name exists but carries no TXT records, or does not exist at all
    #[error("No TXT records found for {0}")]
    NoRecords(String),

    /// Resolver or network error
    #[error("DNS lookup failed: {0}")]
    Lookup(String),

    /// Lookup exceeded the configured deadline
    #[error("DNS lookup for {name} timed out after {timeout_ms} ms")]
    Timeout { name: String, timeout_ms: u64 },

    /// Nameserver address could not be parsed
    #[error("Invalid nameserver address: {0}")]
    InvalidNameserver(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ForsaleError {
    /// Whether it is expected behavior (missing records, malformed IDN input), used for log classification.
    ///
    /// Level `debug` should be used when returning `true` and level `warn` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Idn(_) | Self::NoRecords(_))
    }
}

/// Result type alias
pub type ForsaleResult<T> = std::result::Result<T, ForsaleError>;
