//! `colframe` is a small in-memory, immutable, columnar data frame engine:
//! a typed table abstraction ([`Frame`]) supporting filtering, multi-key
//! sorting, deduplication, group-by aggregation, projection and slicing,
//! plus CSV ingestion with automatic type inference and a thin CSV/JSON
//! serialization boundary.
//!
//! ## Data model
//!
//! A [`Frame`] holds uniquely named, equal-length [`Column`]s. Each column
//! is one of four kinds ([`DataType`]): int, float, bool, or nullable
//! string. Missing values are NaN for floats (ordered below every finite
//! value, equal to itself) and `None` for text (ordered below every present
//! value, distinct from the empty string); int and bool cells are always
//! concrete.
//!
//! Frames are immutable: every operator returns a new frame. Operations
//! that can fail defer their error into the frame instead of returning a
//! `Result`, so chains read fluently and the first error is checked once at
//! the end via [`Frame::err`] (or [`Frame::into_result`]).
//!
//! ## Quick example: ingest, filter, sort
//!
//! ```rust
//! use colframe::{Comparator, CsvOptions, Filter, Order, read_csv};
//!
//! let f = read_csv(
//!     "name,score\nada,2.5\ngrace,\nlin,1.0\n".as_bytes(),
//!     &CsvOptions::default(),
//! );
//! // "score" infers as float; the empty field becomes NaN.
//! let out = f
//!     .filter(&[Filter::new("score", Comparator::Gt, 0.5)])
//!     .sort(&[Order::desc("score")]);
//! assert!(out.err().is_none());
//! assert_eq!(out.row_count(), 2);
//! ```
//!
//! Filters passed in one call combine with OR; chain calls for AND:
//!
//! ```rust
//! use colframe::{Column, Comparator, Filter, Frame};
//!
//! let f = Frame::new([("COL1", Column::Int(vec![1, 2, 3, 4, 5]))]);
//!
//! // Either side of the range: OR.
//! let outer = f.filter(&[
//!     Filter::new("COL1", Comparator::Gt, 4),
//!     Filter::new("COL1", Comparator::Lt, 2),
//! ]);
//! assert!(outer.equals(&Frame::new([("COL1", Column::Int(vec![1, 5]))])).0);
//!
//! // Both constraints: AND, by chaining.
//! let none = f
//!     .filter(&[Filter::new("COL1", Comparator::Gt, 4)])
//!     .filter(&[Filter::new("COL1", Comparator::Lt, 2)]);
//! assert_eq!(none.row_count(), 0);
//! ```
//!
//! ## Group-by and aggregation
//!
//! ```rust
//! use colframe::{Column, Frame};
//!
//! let f = Frame::new([
//!     ("city", Column::Text(vec![
//!         Some("oslo".to_string()),
//!         Some("oslo".to_string()),
//!         Some("bergen".to_string()),
//!     ])),
//!     ("rain", Column::Int(vec![1, 2, 5])),
//! ]);
//! let totals = f.group_by(&["city"]).aggregate("sum", "rain");
//! let expected = Frame::new([
//!     ("city", Column::Text(vec![
//!         Some("oslo".to_string()),
//!         Some("bergen".to_string()),
//!     ])),
//!     ("rain", Column::Int(vec![3, 5])),
//! ]);
//! let (equal, reason) = totals.equals(&expected);
//! assert!(equal, "{reason}");
//! ```
//!
//! ## Modules
//!
//! - [`frame`]: the frame container, `select`/`slice`, equality diagnostics
//! - [`column`]: the typed column and its null/NaN conventions
//! - [`processing`]: filter, sort, distinct, group-by+aggregate
//! - [`ingestion`]: `read_csv` (type inference) and `read_json`
//! - [`render`]: `to_csv` and `to_json`
//! - [`error`]: the shared error type
//!
//! The engine is synchronous and single-threaded per call; a frame, once
//! constructed, may be read concurrently since it is never mutated.

pub mod column;
pub mod error;
pub mod frame;
pub mod ingestion;
pub mod processing;
pub mod render;
pub mod types;

pub use column::Column;
pub use error::{FrameError, FrameResult};
pub use frame::Frame;
pub use ingestion::{CsvOptions, read_csv, read_json};
pub use processing::{Comparator, Filter, Groups, Order};
pub use render::JsonFormat;
pub use types::{DataType, Value};
