//! Top-level check: normalize, look up, evaluate

use std::sync::Arc;

use futures::future::join_all;

use crate::traits::{IdnCodec, TxtResolver};
use crate::types::reasons;
use crate::types::{NormalizedDomain, SaleRecordSet};

use super::evaluator::{evaluate_into, lookup_name};
use super::normalizer::normalize;

/// For-sale check service
///
/// Holds the injected collaborators; carries no per-call state, so one
/// instance can serve concurrent checks.
pub struct ForSaleService {
    idn_codec: Arc<dyn IdnCodec>,
    resolver: Arc<dyn TxtResolver>,
}

impl ForSaleService {
    /// Create a service from its collaborators
    #[must_use]
    pub fn new(idn_codec: Arc<dyn IdnCodec>, resolver: Arc<dyn TxtResolver>) -> Self {
        Self {
            idn_codec,
            resolver,
        }
    }

    /// Validate and canonicalize a domain without looking anything up.
    pub fn normalize(&self, input: &str) -> NormalizedDomain {
        normalize(input, self.idn_codec.as_ref())
    }

    /// Check whether `input` is marked for sale.
    ///
    /// Never returns an error: invalid syntax, `.arpa` exclusion and lookup
    /// failures all surface as `dismiss_reasons` with `for_sale == false`.
    /// No lookup is made unless the domain passes normalization.
    pub async fn check_domain(&self, input: &str) -> SaleRecordSet {
        let normalized = self.normalize(input);
        if !normalized.is_lookup_allowed() {
            return normalized.into_record_set();
        }

        let name = lookup_name(&normalized.ascii);
        let mut set = normalized.into_record_set();

        match self.resolver.lookup_txt(&name).await {
            Ok(records) if !records.is_empty() => evaluate_into(set, records),
            Ok(_) => {
                log::debug!("Lookup for {name} returned no TXT records");
                set.push_reason(reasons::NO_TXT_RECORDS);
                set
            }
            Err(e) => {
                if e.is_expected() {
                    log::debug!("TXT lookup for {name}: {e}");
                } else {
                    log::warn!("TXT lookup for {name} failed: {e}");
                }
                set.push_reason(reasons::NO_TXT_RECORDS);
                set
            }
        }
    }

    /// Check several domains concurrently. Results keep the input order.
    pub async fn check_domains<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<SaleRecordSet> {
        join_all(inputs.iter().map(|input| self.check_domain(input.as_ref()))).await
    }
}
