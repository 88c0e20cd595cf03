//! IDN codec abstraction Trait

use crate::error::ForsaleResult;

/// Converts domains between Unicode and ASCII-compatible (punycode) forms.
///
/// Implementations:
/// - `forsale-toolbox`: `IdnaCodec` (UTS #46 via the `idna` crate)
/// - tests: `MockIdnCodec`
///
/// Must be pure and deterministic. Failures are never fatal to an evaluation:
/// the normalizer falls back to the trimmed input for the failed form.
pub trait IdnCodec: Send + Sync {
    /// Convert to the ASCII (punycode) form.
    fn to_ascii(&self, domain: &str) -> ForsaleResult<String>;

    /// Convert to the Unicode form.
    fn to_unicode(&self, domain: &str) -> ForsaleResult<String>;
}
