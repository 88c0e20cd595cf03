//! Business logic service layer

mod content_parser;
mod evaluator;
mod for_sale_service;
mod normalizer;

pub use content_parser::{format_price, parse_content, parse_price, validate_uri};
pub use evaluator::{
    FOR_SALE_LABEL, VERSION_TAG, evaluate, evaluate_into, lookup_name, strip_version_tag,
};
pub use for_sale_service::ForSaleService;
pub use normalizer::normalize;
