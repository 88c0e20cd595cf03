//! Normalized domain types

use serde::{Deserialize, Serialize};

use super::reasons;
use super::sale::SaleRecordSet;

/// Outcome of domain normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainStatus {
    /// Passed the syntax check and is not excluded; a lookup may follow
    Valid,
    /// Empty, contains a space or path separator, or has no dot
    InvalidSyntax,
    /// Under the `.arpa` infrastructure suffix; must not be looked up
    Excluded,
}

impl DomainStatus {
    /// Diagnostic reason recorded for a non-`Valid` status.
    #[must_use]
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::InvalidSyntax => Some(reasons::INVALID_DOMAIN_SYNTAX),
            Self::Excluded => Some(reasons::ARPA_EXCLUDED),
        }
    }
}

/// A caller-supplied domain with its canonical forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDomain {
    /// Trimmed input
    pub input: String,
    /// ASCII (punycode) form; empty for `InvalidSyntax`
    pub ascii: String,
    /// Unicode form; empty for `InvalidSyntax`
    pub unicode: String,
    pub status: DomainStatus,
}

impl NormalizedDomain {
    /// Whether a DNS lookup should be performed for this domain.
    #[must_use]
    pub fn is_lookup_allowed(&self) -> bool {
        self.status == DomainStatus::Valid
    }

    /// Seed a result with this domain's forms and, for a non-`Valid`
    /// status, its diagnostic reason.
    #[must_use]
    pub fn into_record_set(self) -> SaleRecordSet {
        let mut set = SaleRecordSet::new(&self.input);
        if let Some(reason) = self.status.reason() {
            set.push_reason(reason);
        }
        set.ascii_form = self.ascii;
        set.unicode_form = self.unicode;
        set
    }
}
