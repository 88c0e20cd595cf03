//! Network adapters for `forsale-core`
//!
//! Concrete implementations of the core collaborator traits:
//! - [`HickoryTxtResolver`]: TXT lookups over hickory-resolver with a bounded deadline
//! - [`IdnaCodec`]: Unicode / punycode conversion via the `idna` crate (UTS #46)

mod services;
mod types;

pub use services::{HickoryTxtResolver, IdnaCodec, build_service};
pub use types::ResolverSettings;
