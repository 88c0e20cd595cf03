//! Public types for configuring the adapters.

use std::net::IpAddr;
use std::time::Duration;

use forsale_core::{ForsaleError, ForsaleResult};

/// Default overall deadline for one TXT lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of attempts per nameserver.
pub const DEFAULT_ATTEMPTS: usize = 2;

/// Resolver configuration.
///
/// `timeout` is the overall deadline for one lookup, retries included;
/// `attempts` is handed to hickory as its per-nameserver retry count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Custom nameserver; `None` uses the host system configuration.
    pub nameserver: Option<IpAddr>,
    pub timeout: Duration,
    pub attempts: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            nameserver: None,
            timeout: DEFAULT_TIMEOUT,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl ResolverSettings {
    /// Use the given nameserver address. An empty string keeps the system resolver.
    pub fn with_nameserver(mut self, nameserver: &str) -> ForsaleResult<Self> {
        let nameserver = nameserver.trim();
        self.nameserver = if nameserver.is_empty() {
            None
        } else {
            Some(
                nameserver
                    .parse()
                    .map_err(|_| ForsaleError::InvalidNameserver(nameserver.to_string()))?,
            )
        };
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// At least one attempt is always made.
    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.nameserver, None);
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.attempts, 2);
    }

    #[test]
    fn test_with_nameserver_parses_ipv4_and_ipv6() {
        let v4 = ResolverSettings::default().with_nameserver("1.1.1.1").unwrap();
        assert_eq!(v4.nameserver, Some("1.1.1.1".parse().unwrap()));

        let v6 = ResolverSettings::default()
            .with_nameserver(" 2606:4700:4700::1111 ")
            .unwrap();
        assert_eq!(v6.nameserver, Some("2606:4700:4700::1111".parse().unwrap()));
    }

    #[test]
    fn test_with_nameserver_empty_keeps_system() {
        let settings = ResolverSettings::default().with_nameserver("").unwrap();
        assert_eq!(settings.nameserver, None);
    }

    #[test]
    fn test_with_nameserver_rejects_hostnames() {
        assert_eq!(
            ResolverSettings::default().with_nameserver("dns.google"),
            Err(ForsaleError::InvalidNameserver("dns.google".to_string()))
        );
    }

    #[test]
    fn test_with_attempts_floors_at_one() {
        assert_eq!(ResolverSettings::default().with_attempts(0).attempts, 1);
        assert_eq!(ResolverSettings::default().with_attempts(3).attempts, 3);
    }
}
