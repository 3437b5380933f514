//! Core types shared across sparsediff facilities
//!
//! This crate provides foundational types used by the comparison pipeline,
//! the error facility and the logging facility:
//!
//! - **Side**: which of the two logs (old or new) a value came from
//! - **Schema constants**: canonical field keys and event names

pub mod schema;
pub mod side;

pub use side::Side;
