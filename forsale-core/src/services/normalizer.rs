//! Domain normalization: syntax check, IDN forms, `.arpa` exclusion

use crate::traits::IdnCodec;
use crate::types::{DomainStatus, NormalizedDomain};

/// Infrastructure suffix whose `_for-sale` records must be ignored.
const ARPA_SUFFIX: &str = ".arpa";

/// Superficial syntax check: non-empty, no space or path separator, at least one dot.
fn is_likely_domain(domain: &str) -> bool {
    !domain.is_empty() && !domain.contains([' ', '/', '\\']) && domain.contains('.')
}

/// Whether the ASCII form sits under `.arpa` (case-insensitive, one trailing dot ignored).
fn is_infrastructure_domain(ascii: &str) -> bool {
    let lower = ascii.to_ascii_lowercase();
    lower
        .strip_suffix('.')
        .unwrap_or(&lower)
        .ends_with(ARPA_SUFFIX)
}

/// Validate and canonicalize a caller-supplied domain.
///
/// Never fails: codec errors fall back to the trimmed input for that form,
/// and syntax problems are reported through [`DomainStatus::InvalidSyntax`].
pub fn normalize(input: &str, codec: &dyn IdnCodec) -> NormalizedDomain {
    let input = input.trim();
    if !is_likely_domain(input) {
        log::debug!("Rejected domain input {input:?}: invalid syntax");
        return NormalizedDomain {
            input: input.to_string(),
            ascii: String::new(),
            unicode: String::new(),
            status: DomainStatus::InvalidSyntax,
        };
    }

    let unicode = codec.to_unicode(input).unwrap_or_else(|e| {
        log::debug!("Unicode conversion failed for {input}, using input: {e}");
        input.to_string()
    });
    let ascii = codec.to_ascii(input).unwrap_or_else(|e| {
        log::debug!("ASCII conversion failed for {input}, using input: {e}");
        input.to_string()
    });

    let status = if is_infrastructure_domain(&ascii) {
        log::debug!("Domain {ascii} falls under .arpa, skipping lookup");
        DomainStatus::Excluded
    } else {
        DomainStatus::Valid
    };

    NormalizedDomain {
        input: input.to_string(),
        ascii,
        unicode,
        status,
    }
}
