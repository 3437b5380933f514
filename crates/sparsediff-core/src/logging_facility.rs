//! Structured logging facility for sparsediff
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! All output goes to stderr; stdout is reserved for the diff report.
//!
//! # Usage
//!
//! ```rust
//! use sparsediff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, init_with_level, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
