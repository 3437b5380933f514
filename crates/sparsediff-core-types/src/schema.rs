//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across log events emitted by
//! the pipeline and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Diagnostic identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_SIDE: &str = "side";
pub const FIELD_RECORD: &str = "record";
pub const FIELD_STAGE: &str = "stage";

// Bucket sizes
pub const FIELD_ONLY_NEW: &str = "only_new";
pub const FIELD_ONLY_OLD: &str = "only_old";
pub const FIELD_CHANGED: &str = "changed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_STAGE_SUMMARY: &str = "stage_summary";
pub const EVENT_FILE_RESOLVED: &str = "file_resolved";
pub const EVENT_MALFORMED_RECORD: &str = "malformed_record";
pub const EVENT_ANOMALOUS_FILE: &str = "anomalous_file";
