//! Collaborator abstraction trait definition

mod idn_codec;
mod txt_resolver;

pub use idn_codec::IdnCodec;
pub use txt_resolver::TxtResolver;
