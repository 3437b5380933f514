#![allow(clippy::unwrap_used, clippy::expect_used)]

use sparsediff_core::diff::compare_logs;
use sparsediff_core::errors::{ExError, ExErrorKind, SparseDiffError};
use sparsediff_core::logging_facility::test_capture::init_test_capture;
use sparsediff_core::schema::{
    EVENT_ANOMALOUS_FILE, EVENT_END, EVENT_END_ERROR, EVENT_FILE_RESOLVED, EVENT_MALFORMED_RECORD,
    EVENT_STAGE_SUMMARY, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_PATH, FIELD_RECORD, FIELD_SIDE, FIELD_STAGE,
};
use sparsediff_core::{log_op_end, log_op_error, log_op_start, DiffOptions, Side};

#[test]
fn test_log_op_start_and_end_macros() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_and_end_unique_1";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 42);

    capture.assert_event_exists(op_name, EVENT_START);
    let starts = capture.events_named(EVENT_START);
    let start = starts
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .unwrap();
    assert_eq!(start.field(FIELD_COMPONENT), Some(module_path!()));
    let ends: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_2";

    let err = SparseDiffError::ReadLog {
        side: Side::Old,
        path: "missing.log".to_string(),
        reason: "not found".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 3);

    let errors: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].level, tracing::Level::ERROR);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_IO"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("Io"));
    assert_eq!(errors[0].field(FIELD_DURATION_MS), Some("3"));

    let direct = ExError::new(ExErrorKind::Usage);
    log_op_error!(op_name, direct, duration_ms = 0);
    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some(op_name)
            && e.field(FIELD_ERR_CODE) == Some("ERR_USAGE")),
        1
    );
}

#[test]
fn test_compare_logs_emits_operation_boundaries() {
    let capture = init_test_capture();
    compare_logs("boundary.c:1:1: w", "boundary.c:1:1: w", &DiffOptions::default());
    capture.assert_event_exists("compare_logs", EVENT_START);
    capture.assert_event_exists("compare_logs", EVENT_END);
}

#[test]
fn test_malformed_warning_emitted_without_verbose() {
    let capture = init_test_capture();
    let path = "malformed_unique_3.c";
    let old = format!("{path}:1:1: warning: X\n{path}: odd");
    let new = format!("{path}:1:1: warning: Y");

    compare_logs(&old, &new, &DiffOptions::default());

    let warnings: Vec<_> = capture
        .events_named(EVENT_MALFORMED_RECORD)
        .into_iter()
        .filter(|e| e.field(FIELD_PATH) == Some(path))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, tracing::Level::WARN);
    assert_eq!(warnings[0].field(FIELD_SIDE), Some("old"));
    assert_eq!(warnings[0].field(FIELD_RECORD), Some(format!("{path}: odd").as_str()));
}

#[test]
fn test_stage_narration_only_when_verbose() {
    let capture = init_test_capture();
    let path = "narration_unique_4.c";
    let log = format!("{path}:1:1: warning: same");

    compare_logs(&log, &log, &DiffOptions::default());
    let quiet = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_FILE_RESOLVED) && e.field(FIELD_PATH) == Some(path)
    });
    assert_eq!(quiet, 0);

    compare_logs(&log, &log, &DiffOptions::default().with_verbose(true));
    let resolved: Vec<_> = capture
        .events_named(EVENT_FILE_RESOLVED)
        .into_iter()
        .filter(|e| e.field(FIELD_PATH) == Some(path))
        .collect();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].field(FIELD_STAGE), Some("exact_file"));
    assert!(!capture.events_named(EVENT_STAGE_SUMMARY).is_empty());
}

#[test]
fn test_anomalous_file_event() {
    use sparsediff_core::diff::compare_file_groups;
    use sparsediff_core::log::FileGroups;

    let capture = init_test_capture();
    let path = "anomalous_unique_5.c";
    let mut old = FileGroups::new();
    old.insert(path.to_string(), Vec::new());

    let result = compare_file_groups(old, FileGroups::new(), &DiffOptions::default());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        capture.count_events(|e| e.event.as_deref() == Some(EVENT_ANOMALOUS_FILE)
            && e.field(FIELD_PATH) == Some(path)),
        1
    );
}
