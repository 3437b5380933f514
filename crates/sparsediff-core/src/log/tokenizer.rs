//! First pass: split the log into records and de-interleave them by file.

use super::record::Record;
use std::collections::BTreeMap;

/// Records of one log, keyed by file path, each list in source order.
pub type FileGroups = BTreeMap<String, Vec<Record>>;

/// Split `log` on newlines and group the resulting records by path.
///
/// Nothing is dropped: an empty line lands under the empty-string key, so a
/// log ending in a newline always has one such record.
pub fn group_by_file(log: &str) -> FileGroups {
    let mut groups = FileGroups::new();
    for line in log.split('\n') {
        let record = Record::parse(line);
        groups
            .entry(record.path().to_string())
            .or_default()
            .push(record);
    }
    groups
}
