//! Record content parsing: the part of a TXT record after the version tag

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::reasons;
use crate::types::{Price, SaleContent, SaleRecordSet, ValidatedUri};
use crate::utils::text::sanitize_text;

const FTXT_TAG: &str = "ftxt=";
const FURI_TAG: &str = "furi=";
const FVAL_TAG: &str = "fval=";
const FCOD_TAG: &str = "fcod=";

/// Schemes a `furi=` value may use.
const ALLOWED_URI_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// `CUR123[.45]`: uppercase currency letters followed by an ASCII decimal amount.
#[allow(clippy::expect_used)]
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+)([0-9]+(?:\.[0-9]+)?)$").expect("price pattern compiles")
});

/// Symbol used in place of the currency code when displaying a price.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "CHF" => Some("CHF"),
        "AUD" => Some("A$"),
        "CAD" => Some("C$"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Build a [`Price`] from an already split currency code and amount.
pub fn format_price(currency: &str, amount: &str) -> Price {
    let symbol = currency_symbol(currency).unwrap_or(currency);
    Price {
        currency: currency.to_string(),
        amount_string: amount.to_string(),
        amount_float: amount.parse().ok(),
        formatted_display: format!("{symbol} {amount}"),
    }
}

/// Split a `fval=` value into a [`Price`], or `None` when it is not `CUR123[.45]`.
pub fn parse_price(value: &str) -> Option<Price> {
    let caps = PRICE_PATTERN.captures(value)?;
    Some(format_price(caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Whether every `%` in `value` starts a two-digit hex escape.
fn has_valid_escapes(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}

/// Validate a `furi=` value against the allowed scheme list.
///
/// Stricter than WHATWG parsing: malformed percent-escapes and a colon in the
/// first segment of a scheme-less reference are parse failures.
pub fn validate_uri(value: &str) -> ValidatedUri {
    let mut validated = ValidatedUri {
        uri: value.to_string(),
        scheme: String::new(),
        valid: false,
        note: String::new(),
    };

    if !has_valid_escapes(value) {
        log::debug!("furi value {value:?} has a malformed percent-escape");
        validated.note = reasons::URI_UNPARSEABLE.to_string();
        return validated;
    }

    match Url::parse(value) {
        Ok(url) => {
            let scheme = url.scheme().to_ascii_lowercase();
            if ALLOWED_URI_SCHEMES.contains(&scheme.as_str()) {
                validated.valid = true;
                validated.scheme = scheme;
            } else {
                validated.note = reasons::URI_UNSUPPORTED_SCHEME.to_string();
            }
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let first_segment = value.split_once('/').map_or(value, |(head, _)| head);
            validated.note = if first_segment.contains(':') {
                reasons::URI_UNPARSEABLE.to_string()
            } else {
                reasons::URI_MISSING_SCHEME.to_string()
            };
        }
        Err(e) => {
            log::debug!("furi value {value:?} did not parse: {e}");
            validated.note = reasons::URI_UNPARSEABLE.to_string();
        }
    }

    validated
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl SaleContent {
    /// Classify record content (the text after `v=FORSALE1;`).
    ///
    /// Tags are matched case-sensitively; at most one applies per record.
    pub fn parse(content: &str) -> Self {
        let content = content.trim();
        if content.is_empty() {
            return Self::Empty;
        }

        if let Some(value) = content.strip_prefix(FTXT_TAG) {
            Self::FreeText(non_empty(sanitize_text(value)))
        } else if let Some(value) = content.strip_prefix(FURI_TAG) {
            Self::Uri(validate_uri(value.trim()))
        } else if let Some(value) = content.strip_prefix(FVAL_TAG) {
            let value = value.trim();
            Self::Price(parse_price(value).ok_or_else(|| value.to_string()))
        } else if let Some(value) = content.strip_prefix(FCOD_TAG) {
            Self::BrokerCode(non_empty(sanitize_text(value)))
        } else {
            Self::Unrecognized(content.to_string())
        }
    }
}

impl SaleRecordSet {
    /// Fold one parsed record into the aggregate.
    ///
    /// Any content behind a valid version tag marks the domain for sale,
    /// including empty, malformed and unrecognized content.
    pub fn apply(&mut self, content: SaleContent) {
        self.for_sale = true;
        match content {
            SaleContent::Empty => self.push_reason(reasons::EMPTY_RECORD),
            SaleContent::FreeText(Some(text)) => self.free_text_values.push(text),
            SaleContent::FreeText(None) => self.push_reason(reasons::EMPTY_FTXT),
            SaleContent::Uri(uri) => {
                if !uri.valid {
                    self.push_warning(format!(
                        "{} {} {}",
                        reasons::POSSIBLY_INVALID_FURI,
                        uri.uri,
                        uri.note
                    ));
                }
                self.uri_values.push(uri);
            }
            SaleContent::Price(Ok(price)) => self.price_values.push(price),
            SaleContent::Price(Err(raw)) => {
                self.push_reason(format!("{} {raw}", reasons::INVALID_FVAL));
            }
            SaleContent::BrokerCode(Some(code)) => self.broker_codes.push(code),
            SaleContent::BrokerCode(None) => self.push_reason(reasons::EMPTY_FCOD),
            SaleContent::Unrecognized(raw) => {
                self.push_reason(format!("{} {raw}", reasons::UNKNOWN_TAG));
            }
        }
    }
}

/// Parse `content` and fold it into `into`. Never fails.
pub fn parse_content(content: &str, into: &mut SaleRecordSet) {
    into.apply(SaleContent::parse(content));
}
