//! Parsed content of one versioned `_for-sale` record

use super::sale::{Price, ValidatedUri};

/// The content tag carried after `v=FORSALE1;`, one variant per tag.
///
/// Produced by `SaleContent::parse` and folded into a
/// [`SaleRecordSet`](super::SaleRecordSet) by `SaleRecordSet::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleContent {
    /// Version tag with nothing after it
    Empty,
    /// `ftxt=`; `None` when the value is empty after sanitizing
    FreeText(Option<String>),
    /// `furi=`, valid or not
    Uri(ValidatedUri),
    /// `fval=`; `Err` holds the value that did not match `CUR123[.45]`
    Price(Result<Price, String>),
    /// `fcod=`; `None` when the value is empty after sanitizing
    BrokerCode(Option<String>),
    /// Anything else, with the full content
    Unrecognized(String),
}
