//! Diagnostic strings written into [`SaleRecordSet`](super::SaleRecordSet).
//!
//! Callers distinguish outcomes ("excluded", "no records", "for sale") by
//! these strings and the `for_sale` flag; the service never returns errors.
//! Entries ending in `:` are followed by a space and the offending value.

/// Input failed the superficial domain syntax check.
pub const INVALID_DOMAIN_SYNTAX: &str = "invalid domain syntax";

/// Domain lives under the `.arpa` infrastructure suffix.
pub const ARPA_EXCLUDED: &str = "domain falls under .arpa infrastructure and is ignored";

/// Lookup failed or returned no records.
pub const NO_TXT_RECORDS: &str = "no TXT records found or lookup error";

/// Records were returned but none carried the version tag.
pub const NO_VERSION_TAG: &str = "no valid _for-sale indicator found (no version tag)";

/// Version tag followed by nothing.
pub const EMPTY_RECORD: &str = "empty sale record (version tag only)";

/// `ftxt=` with an empty value after sanitizing.
pub const EMPTY_FTXT: &str = "empty ftxt value";

/// `fcod=` with an empty value after sanitizing.
pub const EMPTY_FCOD: &str = "empty fcod value";

/// `fval=` value not shaped like `CUR123[.45]`.
pub const INVALID_FVAL: &str = "invalid fval structure; expected CUR123[.45]:";

/// Content after the version tag carries no known tag.
pub const UNKNOWN_TAG: &str = "unknown or invalid content tag:";

/// Warning prefix for a `furi=` value that failed validation.
pub const POSSIBLY_INVALID_FURI: &str = "possibly invalid furi:";

/// URI notes
pub const URI_UNPARSEABLE: &str = "could not parse URI";
pub const URI_MISSING_SCHEME: &str = "missing scheme";
pub const URI_UNSUPPORTED_SCHEME: &str = "unsupported URI scheme";
