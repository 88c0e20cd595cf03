//! Adapter implementations and service wiring.

mod idn;
mod resolver;
mod txt_lookup;

use std::sync::Arc;

use forsale_core::ForSaleService;

use crate::types::ResolverSettings;

pub use idn::IdnaCodec;
pub use txt_lookup::HickoryTxtResolver;

/// Build a [`ForSaleService`] wired to [`IdnaCodec`] and a [`HickoryTxtResolver`].
///
/// ```rust,no_run
/// use forsale_toolbox::{ResolverSettings, build_service};
/// # async fn demo() {
/// let service = build_service(ResolverSettings::default());
/// let result = service.check_domain("example.nl").await;
/// println!("for sale: {}", result.for_sale);
/// # }
/// ```
#[must_use]
pub fn build_service(settings: ResolverSettings) -> ForSaleService {
    let resolver = HickoryTxtResolver::new(settings);
    log::info!(
        "Using DNS server {} with {} ms timeout",
        resolver.nameserver_label(),
        resolver.settings().timeout.as_millis()
    );
    ForSaleService::new(Arc::new(IdnaCodec), Arc::new(resolver))
}
