//! IDN codec adapter over the `idna` crate.

use forsale_core::{ForsaleError, ForsaleResult, IdnCodec};

/// [`IdnCodec`] using UTS #46 processing with STD3 rules and DNS length checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdnaCodec;

impl IdnCodec for IdnaCodec {
    fn to_ascii(&self, domain: &str) -> ForsaleResult<String> {
        idna::domain_to_ascii_strict(domain.trim())
            .map_err(|e| ForsaleError::Idn(format!("{domain}: {e}")))
    }

    fn to_unicode(&self, domain: &str) -> ForsaleResult<String> {
        let (unicode, result) = idna::domain_to_unicode(domain.trim());
        result
            .map(|()| unicode)
            .map_err(|e| ForsaleError::Idn(format!("{domain}: {e}")))
    }
}
