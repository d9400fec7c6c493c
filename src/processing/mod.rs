//! Query operators over [`crate::frame::Frame`].
//!
//! Every operator is a pure function from an input frame to a freshly
//! constructed output frame: it computes a sequence of source-row indices and
//! materializes each output column by gathering at those indices. Operators
//! on a frame that already carries an error propagate that error unchanged.
//!
//! Implemented here:
//!
//! - [`filter`]: row filtering by comparator specs ([`Filter`]); specs within
//!   one call combine with OR, chained calls compose with AND
//! - [`sort`]: stable multi-key ordering ([`Order`])
//! - [`group`]: group-by + aggregation ([`Groups`]) and `distinct`
//!
//! `select` and `slice` live on the frame itself since they touch no
//! kind-specific logic.
//!
//! ## Example: chain filter → sort
//!
//! ```rust
//! use colframe::{Column, Comparator, Filter, Frame, Order};
//!
//! let f = Frame::new([("id", Column::Int(vec![3, 1, 4, 1, 5]))]);
//! let out = f
//!     .filter(&[Filter::new("id", Comparator::Gt, 1)])
//!     .sort(&[Order::asc("id")]);
//! assert!(out.err().is_none());
//! let expected = Frame::new([("id", Column::Int(vec![3, 4, 5]))]);
//! assert!(out.equals(&expected).0);
//! ```

pub mod filter;
pub mod group;
pub mod sort;

pub use filter::{Comparator, Filter};
pub use group::Groups;
pub use sort::Order;
