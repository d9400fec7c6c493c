//! Reading frames from external text formats.
//!
//! - [`csv`]: delimited text with automatic type inference ([`read_csv`])
//! - [`json`]: row- or column-oriented JSON ([`read_json`])
//!
//! Both readers return a [`crate::Frame`] whose deferred-error slot carries
//! any failure, so ingestion composes with operator chains and the error is
//! checked once at the end.

pub mod csv;
pub mod json;

pub use csv::{CsvOptions, read_csv};
pub use json::read_json;
