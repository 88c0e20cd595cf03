//! DNS resolver construction helpers.

use hickory_resolver::{
    TokioResolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
};

use crate::types::ResolverSettings;

/// Apply the timeout and attempt count from `settings`.
fn apply_settings(opts: &mut ResolverOpts, settings: &ResolverSettings) {
    opts.timeout = settings.timeout;
    opts.attempts = settings.attempts;
}

/// Build a resolver that targets `settings.nameserver`, or falls back to the
/// system configuration when it is `None`.
pub(crate) fn build_resolver(settings: &ResolverSettings) -> TokioResolver {
    if let Some(ns_ip) = settings.nameserver {
        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(&[ns_ip], 53, true),
        );
        let provider = TokioConnectionProvider::default();
        let mut opts = ResolverOpts::default();
        apply_settings(&mut opts, settings);
        return TokioResolver::builder_with_config(config, provider)
            .with_options(opts)
            .build();
    }

    build_system_resolver(settings)
}

/// Build a resolver using the host system DNS configuration (with fallback).
fn build_system_resolver(settings: &ResolverSettings) -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(mut builder) => {
                apply_settings(builder.options_mut(), settings);
                return builder.build();
            }
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    let provider = TokioConnectionProvider::default();
    let mut opts = ResolverOpts::default();
    apply_settings(&mut opts, settings);
    TokioResolver::builder_with_config(ResolverConfig::default(), provider)
        .with_options(opts)
        .build()
}
