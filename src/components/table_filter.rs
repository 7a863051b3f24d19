use crate::record::Record;
use crate::value::Value;

/// Records whose visible fields contain `term`, case-insensitively.
///
/// A blank term (empty or whitespace only) passes every record through in
/// input order, including records missing some fields. A non-blank term is
/// matched as typed, lower-cased but not trimmed.
pub fn search_records<'r>(
    records: &'r [Record],
    visible_fields: &[&str],
    term: &str,
) -> Vec<&'r Record> {
    if term.trim().is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, visible_fields, &needle))
        .collect()
}

/// `needle` must already be lower-cased. Null and absent values never match.
pub fn record_matches(record: &Record, visible_fields: &[&str], needle: &str) -> bool {
    visible_fields.iter().any(|field| match record.value(field) {
        Value::Null => false,
        value => value.display_text().to_lowercase().contains(needle),
    })
}
