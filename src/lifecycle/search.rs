use crate::core::DeletableRecord;

/// Case-insensitive substring match of `term` against a record's display fields
///
/// With no designated fields every display field is searched. The empty term matches
/// everything; any other term, whitespace included, is matched as given.
pub fn matches(record: &DeletableRecord, term: &str, fields: &[&str]) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    matches_lowered(record, &needle, fields)
}

/// Records matching `term`, in list order; the input is left untouched
pub fn project(records: &[DeletableRecord], term: &str, fields: &[&str]) -> Vec<DeletableRecord> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches_lowered(record, &needle, fields))
        .cloned()
        .collect()
}

fn matches_lowered(record: &DeletableRecord, needle: &str, fields: &[&str]) -> bool {
    if fields.is_empty() {
        record
            .fields
            .values()
            .any(|value| value.to_lowercase().contains(needle))
    } else {
        fields
            .iter()
            .filter_map(|name| record.field(name))
            .any(|value| value.to_lowercase().contains(needle))
    }
}
