//! Evaluation result types

use serde::{Deserialize, Serialize};

/// A `furi=` value with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedUri {
    /// URI as written in the record (trimmed)
    pub uri: String,
    /// Lowercased scheme, filled only when `valid`
    pub scheme: String,
    /// Parses and uses an allowed scheme
    pub valid: bool,
    /// Why validation failed, empty when `valid`
    pub note: String,
}

/// A `fval=` price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Currency code as written (uppercase letters)
    pub currency: String,
    /// Amount exactly as written
    #[serde(rename = "amountString")]
    pub amount_string: String,
    /// Numeric amount, when it parses
    #[serde(rename = "amountFloat", default, skip_serializing_if = "Option::is_none")]
    pub amount_float: Option<f64>,
    /// Display string, `"<symbol> <amount>"` or `"<CODE> <amount>"`
    #[serde(rename = "formattedNice")]
    pub formatted_display: String,
}

/// Outcome of evaluating one domain.
///
/// Built fresh per call and handed to the caller; nothing is retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRecordSet {
    /// Caller-supplied domain, trimmed
    #[serde(rename = "domainInput")]
    pub domain_input: String,
    /// Unicode form (input on codec failure)
    #[serde(rename = "unicode")]
    pub unicode_form: String,
    /// ASCII / punycode form (input on codec failure)
    #[serde(rename = "punycode")]
    pub ascii_form: String,

    #[serde(rename = "forSale")]
    pub for_sale: bool,
    /// Diagnostics in processing order, never deduplicated
    #[serde(rename = "dismissReasons")]
    pub dismiss_reasons: Vec<String>,

    #[serde(rename = "ftxt")]
    pub free_text_values: Vec<String>,
    #[serde(rename = "furi")]
    pub uri_values: Vec<ValidatedUri>,
    #[serde(rename = "fval")]
    pub price_values: Vec<Price>,
    #[serde(rename = "fcod")]
    pub broker_codes: Vec<String>,
    /// Every TXT string seen, in response order
    #[serde(rename = "rawRR")]
    pub raw_records: Vec<String>,

    /// Recoverable anomalies, kept apart from `dismiss_reasons`
    pub warnings: Vec<String>,
}

impl SaleRecordSet {
    /// Empty result for a (trimmed) input.
    #[must_use]
    pub fn new(domain_input: &str) -> Self {
        Self {
            domain_input: domain_input.trim().to_string(),
            ..Self::default()
        }
    }

    /// Whether any of the four value categories holds an entry.
    #[must_use]
    pub fn has_values(&self) -> bool {
        !self.free_text_values.is_empty()
            || !self.uri_values.is_empty()
            || !self.price_values.is_empty()
            || !self.broker_codes.is_empty()
    }

    pub fn push_reason(&mut self, reason: impl Into<String>) {
        self.dismiss_reasons.push(reason.into());
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Sort the value categories for stable presentation.
    ///
    /// `raw_records`, `dismiss_reasons` and `warnings` keep processing order.
    pub fn sort_values(&mut self) {
        self.free_text_values.sort();
        self.broker_codes.sort();
        self.uri_values.sort_by(|a, b| a.uri.cmp(&b.uri));
        self.price_values
            .sort_by(|a, b| a.formatted_display.cmp(&b.formatted_display));
    }
}
