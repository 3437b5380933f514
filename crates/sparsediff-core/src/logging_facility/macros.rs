//! Canonical logging macros
//!
//! Every operation boundary carries the same [`schema`](crate::schema) keys
//! (`component`, `op`, `event`) so captured events can be matched without
//! parsing messages. Field names are taken from the schema constants.

/// Shared body of the boundary macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:expr, $op:expr, $event:expr, $($field:tt)*) => {
        $crate::tracing::event!(
            $level,
            { $crate::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::schema::FIELD_OP } = $op,
            { $crate::schema::FIELD_EVENT } = $event,
            $($field)*
        )
    };
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use sparsediff_core::log_op_start;
/// log_op_start!("compare_logs");
/// log_op_start!("compare_logs", old_files = 3, new_files = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__log_op_event!(
            $crate::tracing::Level::INFO,
            $op,
            $crate::schema::EVENT_START,
        )
    };
    ($op:expr, $($field:tt)*) => {
        $crate::__log_op_event!(
            $crate::tracing::Level::INFO,
            $op,
            $crate::schema::EVENT_START,
            $($field)*
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use sparsediff_core::log_op_end;
/// log_op_end!("compare_logs", duration_ms = 42);
/// log_op_end!("compare_logs", duration_ms = 42, removed = 1, added = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::__log_op_event!(
            $crate::tracing::Level::INFO,
            $op,
            $crate::schema::EVENT_END,
            { $crate::schema::FIELD_DURATION_MS } = $duration,
        )
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::__log_op_event!(
            $crate::tracing::Level::INFO,
            $op,
            $crate::schema::EVENT_END,
            { $crate::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        )
    };
}

/// Log a failed operation at error level
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind and stable code are attached as `err_kind` and `err_code`.
///
/// # Example
///
/// ```
/// # use sparsediff_core::log_op_error;
/// # use sparsediff_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::Io).with_path("old.log");
/// log_op_error!("read_log", err, duration_ms = 1, side = "old");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            $crate::tracing::Level::ERROR,
            $op,
            $crate::schema::EVENT_END_ERROR,
            { $crate::schema::FIELD_DURATION_MS } = $duration,
            { $crate::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::schema::FIELD_ERR_CODE } = ex_err.code(),
            $($field)*
        )
    }};
}
