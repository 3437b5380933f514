//! Matching with the line number erased.
//!
//! An edit earlier in a file shifts every later diagnostic without changing
//! what it says. Comparing on `path:column:message` suppresses those moves.
//! Whatever still differs is reported with the line number replaced by a
//! placeholder, since it no longer means the same thing on both sides.

use super::model::{DiffWarning, Residual};
use super::multiset::surplus_both;
use crate::log::record::DELIMITER;
use crate::log::Record;
use sparsediff_core_types::schema::{
    EVENT_MALFORMED_RECORD, FIELD_EVENT, FIELD_PATH, FIELD_RECORD, FIELD_SIDE,
};
use sparsediff_core_types::Side;

/// Match two residual record lists ignoring line numbers.
///
/// Malformed records are dropped from both sides, each one producing a
/// [`DiffWarning::MalformedRecord`] and a warn-level event regardless of
/// verbosity. Surviving records come back as
/// `[path, placeholder, column, message...]`.
pub fn match_ignoring_line_numbers(
    old: &[Record],
    new: &[Record],
    placeholder: &str,
    warnings: &mut Vec<DiffWarning>,
) -> Residual {
    let old_keys = line_free_keys(old, Side::Old, warnings);
    let new_keys = line_free_keys(new, Side::New, warnings);

    let (old_left, new_left) = surplus_both(&old_keys, &new_keys);

    Residual {
        old: old_left
            .iter()
            .map(|key| restore(key, placeholder))
            .collect(),
        new: new_left
            .iter()
            .map(|key| restore(key, placeholder))
            .collect(),
    }
}

/// `path:column:message` for each well-formed record.
fn line_free_keys(records: &[Record], side: Side, warnings: &mut Vec<DiffWarning>) -> Vec<String> {
    let mut keys = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_well_formed() {
            let warning = DiffWarning::MalformedRecord {
                side,
                path: record.path().to_string(),
                record: record.to_line(),
            };
            tracing::warn!(
                { FIELD_EVENT } = EVENT_MALFORMED_RECORD,
                { FIELD_SIDE } = side.as_str(),
                { FIELD_PATH } = record.path(),
                { FIELD_RECORD } = %record,
                "{}",
                warning
            );
            warnings.push(warning);
            continue;
        }

        let fields = record.fields();
        let mut key = fields[0].clone();
        for field in &fields[2..] {
            key.push(DELIMITER);
            key.push_str(field);
        }
        keys.push(key);
    }
    keys
}

fn restore(key: &str, placeholder: &str) -> Record {
    let mut fields: Vec<String> = key.split(DELIMITER).map(str::to_string).collect();
    fields.insert(1, placeholder.to_string());
    Record::from_fields(fields)
}
