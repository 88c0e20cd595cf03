//! Type definition module

mod content;
mod domain;
pub mod reasons;
mod sale;

pub use content::SaleContent;
pub use domain::{DomainStatus, NormalizedDomain};
pub use sale::{Price, SaleRecordSet, ValidatedUri};
