//! Second pass: rebuild multi-line diagnostics.
//!
//! Compilers such as sparse print one diagnostic over several physical lines
//! sharing the same location, with only the first carrying a severity:
//!
//! ```text
//! drivers/scsi/lpfc/lpfc_scsi.c:5606:30: warning: incorrect type in assignment (different base types)
//! drivers/scsi/lpfc/lpfc_scsi.c:5606:30:    expected int [signed] memory_flags
//! drivers/scsi/lpfc/lpfc_scsi.c:5606:30:    got restricted gfp_t
//! ```
//!
//! These collapse into a single record whose last field holds the whole text.

use super::record::Record;

/// Severities that always open a new diagnostic, even at an unchanged location
const SEVERITY_MARKERS: &[&str] = &["warning", "error"];

/// Merge continuation lines of one file's records into their header record.
///
/// A well-formed record continues the previous well-formed record when both
/// share `(line, column)` and its field 3 is not a severity marker. Malformed
/// records pass through untouched and never anchor a merge.
pub fn merge_continuations(records: Vec<Record>) -> Vec<Record> {
    let mut merged: Vec<Record> = Vec::with_capacity(records.len());
    // index in `merged` of the last retained well-formed record
    let mut anchor: Option<usize> = None;

    for record in records {
        if !record.is_well_formed() {
            merged.push(record);
            continue;
        }

        match anchor {
            Some(index) if continues(&merged[index], &record) => {
                let text = record.message().unwrap_or_default();
                merged[index].append_to_last(&text);
            }
            _ => {
                anchor = Some(merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

fn continues(previous: &Record, record: &Record) -> bool {
    let opens_new = record
        .severity()
        .is_some_and(|severity| SEVERITY_MARKERS.contains(&severity));
    !opens_new && previous.position() == record.position()
}
