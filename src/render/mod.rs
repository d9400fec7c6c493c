//! Writing frames to external text formats.
//!
//! - [`csv`]: delimited text via [`crate::Frame::to_csv`]
//! - [`json`]: row- or column-oriented JSON via [`crate::Frame::to_json`]
//!
//! Render calls take a writer, so unlike the operators they cannot defer
//! failure; they surface the frame's pending error (or their own I/O error)
//! as an ordinary `Result`.

pub mod csv;
pub mod json;

pub use json::JsonFormat;
