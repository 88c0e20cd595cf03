//! Core library for `_for-sale` DNS TXT record checks.
//!
//! Decides whether a domain is marked "for sale" by its `_for-sale.<domain>`
//! TXT records, extracting structured sale attributes and diagnostics:
//! - Domain normalization (syntax check, IDN forms, `.arpa` exclusion)
//! - Record content parsing (`ftxt=`, `furi=`, `fval=`, `fcod=`)
//! - Record set evaluation and orchestration (`ForSaleService`)
//!
//! DNS resolution and IDN conversion are injected through traits, so the
//! library carries no process-wide state and no concrete network code.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ForsaleError, ForsaleResult};
pub use services::{
    ForSaleService, evaluate, evaluate_into, lookup_name, normalize, parse_content,
};
pub use traits::{IdnCodec, TxtResolver};
pub use types::{
    DomainStatus, NormalizedDomain, Price, SaleContent, SaleRecordSet, ValidatedUri,
};
