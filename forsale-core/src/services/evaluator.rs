//! Record set evaluation: folds raw TXT strings into a [`SaleRecordSet`]

use crate::types::SaleRecordSet;
use crate::types::reasons;

use super::content_parser::parse_content;

/// Version tag every sale record must start with.
pub const VERSION_TAG: &str = "v=FORSALE1;";

/// Label under which sale records are published.
pub const FOR_SALE_LABEL: &str = "_for-sale";

/// Owner name of the sale records for an ASCII domain.
#[must_use]
pub fn lookup_name(ascii_domain: &str) -> String {
    format!("{FOR_SALE_LABEL}.{ascii_domain}")
}

/// Content after the version tag, or `None` when the record does not carry it.
///
/// The record is trimmed first; spaces right after the tag's `;` are tolerated.
#[must_use]
pub fn strip_version_tag(record: &str) -> Option<&str> {
    record
        .trim()
        .strip_prefix(VERSION_TAG)
        .map(|rest| rest.trim_start_matches(' '))
}

/// Evaluate raw TXT strings for an ASCII domain.
///
/// The domain fills all three name fields of the result. Never fails.
pub fn evaluate<I>(ascii_domain: &str, records: I) -> SaleRecordSet
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut seed = SaleRecordSet::new(ascii_domain);
    seed.ascii_form.clone_from(&seed.domain_input);
    seed.unicode_form.clone_from(&seed.domain_input);
    evaluate_into(seed, records)
}

/// Fold raw TXT strings, in response order, into an already seeded result.
///
/// Records without the version tag are kept in `raw_records` only. Value
/// categories are sorted afterwards so the outcome does not depend on the
/// order the resolver returned them in.
pub fn evaluate_into<I>(seed: SaleRecordSet, records: I) -> SaleRecordSet
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut set = records.into_iter().fold(seed, |mut set, record| {
        let record: String = record.into();
        match strip_version_tag(&record) {
            Some(content) => {
                log::debug!("Parsing sale record for {}: {content:?}", set.ascii_form);
                parse_content(content, &mut set);
            }
            None => log::debug!("Ignoring TXT record without version tag: {record:?}"),
        }
        set.raw_records.push(record);
        set
    });

    set.sort_values();

    if !set.for_sale && !set.has_values() {
        set.push_reason(reasons::NO_VERSION_TAG);
    }

    log::info!(
        "Evaluated {} TXT record(s) for {}: for_sale={}",
        set.raw_records.len(),
        set.ascii_form,
        set.for_sale
    );
    set
}
