//! TXT lookup adapter over hickory-resolver.

use async_trait::async_trait;
use forsale_core::{ForsaleError, ForsaleResult, TxtResolver};
use hickory_resolver::TokioResolver;
use tokio::time::timeout;

use crate::types::ResolverSettings;

use super::resolver::build_resolver;

/// [`TxtResolver`] backed by a hickory `TokioResolver`.
///
/// Every lookup is bounded by `settings.timeout`, retries included.
pub struct HickoryTxtResolver {
    resolver: TokioResolver,
    settings: ResolverSettings,
}

impl HickoryTxtResolver {
    #[must_use]
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            resolver: build_resolver(&settings),
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// The configured nameserver, or `system` when the host configuration is used.
    pub fn nameserver_label(&self) -> String {
        self.settings
            .nameserver
            .map_or_else(|| "system".to_string(), |ip| ip.to_string())
    }
}

/// Concatenate the character-strings of one TXT record, decoding lossily.
fn join_character_strings<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
    parts
        .into_iter()
        .map(String::from_utf8_lossy)
        .collect::<String>()
}

#[async_trait]
impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> ForsaleResult<Vec<String>> {
        let response = timeout(self.settings.timeout, self.resolver.txt_lookup(name))
            .await
            .map_err(|_| ForsaleError::Timeout {
                name: name.to_string(),
                timeout_ms: u64::try_from(self.settings.timeout.as_millis()).unwrap_or(u64::MAX),
            })?
            .map_err(|e| {
                if e.is_no_records_found() {
                    ForsaleError::NoRecords(name.to_string())
                } else {
                    ForsaleError::Lookup(format!("{name}: {e}"))
                }
            })?;

        let records: Vec<String> = response
            .iter()
            .map(|txt| join_character_strings(txt.iter().map(|part| &part[..])))
            .collect();
        log::debug!("{name}: {} TXT record(s)", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_character_strings_concatenates() {
        let parts: [&[u8]; 2] = [b"v=FORSALE1;ftxt=split ", b"across strings"];
        assert_eq!(
            join_character_strings(parts),
            "v=FORSALE1;ftxt=split across strings"
        );
    }

    #[test]
    fn test_join_character_strings_lossy_utf8() {
        let parts: [&[u8]; 1] = [b"v=FORSALE1;ftxt=caf\xc3\xa9 \xff"];
        assert_eq!(join_character_strings(parts), "v=FORSALE1;ftxt=café \u{fffd}");
    }

    #[test]
    fn test_join_character_strings_empty() {
        assert_eq!(join_character_strings(std::iter::empty()), "");
    }

    #[test]
    fn test_nameserver_label_for_custom_server() {
        let settings = ResolverSettings::default()
            .with_nameserver("1.1.1.1")
            .unwrap_or_default();
        let resolver = HickoryTxtResolver::new(settings);
        assert_eq!(resolver.nameserver_label(), "1.1.1.1");
    }

    #[test]
    fn test_nameserver_label_for_system_resolver() {
        let resolver = HickoryTxtResolver::new(ResolverSettings::default());
        assert_eq!(resolver.nameserver_label(), "system");
    }
}
