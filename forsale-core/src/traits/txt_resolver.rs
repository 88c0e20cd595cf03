//! TXT resolver abstraction Trait

use async_trait::async_trait;

use crate::error::ForsaleResult;

/// Resolves TXT records for a fully built owner name.
///
/// Implementations:
/// - `forsale-toolbox`: `HickoryTxtResolver` (hickory-resolver, bounded timeout)
/// - tests: `MockTxtResolver`
///
/// The service treats every error the same way, so implementations only need
/// to pick a variant for logging. Implementations are responsible for bounding
/// the lookup time; the service imposes no deadline of its own.
#[async_trait]
pub trait TxtResolver: Send + Sync {
    /// Look up all TXT records at `name`.
    ///
    /// # Returns
    /// * `Ok(records)` - one string per TXT record, character-strings concatenated, in response order
    /// * `Err(_)` - NXDOMAIN, timeout, or network error
    async fn lookup_txt(&self, name: &str) -> ForsaleResult<Vec<String>>;
}
