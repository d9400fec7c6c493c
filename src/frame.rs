//! The frame container: named, equal-length columns plus a deferred error.
//!
//! A [`Frame`] is immutable once constructed. Every operator returns a new
//! frame; operators on a frame that already carries an error are no-ops that
//! propagate the same error, so chains are checked once at the end via
//! [`Frame::err`].
//!
//! Column *order* is a rendering concern only: construction takes an
//! unordered name→column mapping and defaults to alphabetical order, with
//! [`Frame::with_order`] for an explicit order (e.g. CSV header order).
//! Equality never looks at order.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::column::Column;
use crate::error::FrameError;

#[derive(Debug, Clone)]
pub(crate) struct NamedColumn {
    pub(crate) name: String,
    pub(crate) data: Arc<Column>,
}

/// An immutable set of uniquely named, equal-length columns.
#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) columns: Vec<NamedColumn>,
    pub(crate) err: Option<FrameError>,
}

impl Frame {
    /// Builds a frame from a name→column mapping; columns render in
    /// alphabetical name order.
    ///
    /// Length disagreement between columns is deferred into the error slot
    /// rather than panicking, so construction composes with operator chains.
    pub fn new<S, I>(data: I) -> Frame
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Column)>,
    {
        let map: BTreeMap<String, Column> = data
            .into_iter()
            .map(|(name, col)| (name.into(), col))
            .collect();
        Self::from_ordered(map.into_iter().collect())
    }

    /// Builds a frame like [`Frame::new`] but with an explicit render order.
    ///
    /// Names in `order` come first, in the given order; any remaining
    /// columns follow alphabetically. Naming a column that is not in the
    /// mapping yields an errored frame (`UnknownColumn`).
    pub fn with_order<S, I>(data: I, order: &[&str]) -> Frame
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Column)>,
    {
        let mut map: BTreeMap<String, Column> = data
            .into_iter()
            .map(|(name, col)| (name.into(), col))
            .collect();

        let mut ordered = Vec::with_capacity(map.len());
        for &name in order {
            match map.remove(name) {
                Some(col) => ordered.push((name.to_string(), col)),
                None => return Frame::from_error(FrameError::UnknownColumn(name.to_string())),
            }
        }
        ordered.extend(map);
        Self::from_ordered(ordered)
    }

    fn from_ordered(columns: Vec<(String, Column)>) -> Frame {
        let expected = columns.first().map(|(_, col)| col.len());
        if let Some(expected) = expected {
            for (name, col) in &columns {
                if col.len() != expected {
                    return Frame::from_error(FrameError::ColumnLengthMismatch {
                        column: name.clone(),
                        expected,
                        actual: col.len(),
                    });
                }
            }
        }

        Frame {
            columns: columns
                .into_iter()
                .map(|(name, col)| NamedColumn {
                    name,
                    data: Arc::new(col),
                })
                .collect(),
            err: None,
        }
    }

    /// A frame carrying only an error; every chained operator propagates it.
    pub(crate) fn from_error(err: FrameError) -> Frame {
        Frame {
            columns: Vec::new(),
            err: Some(err),
        }
    }

    /// The deferred first error, if any operation in the chain failed.
    pub fn err(&self) -> Option<&FrameError> {
        self.err.as_ref()
    }

    /// Consumes the frame, surfacing the deferred error as an ordinary
    /// `Result`. Convenient at the end of a chain.
    pub fn into_result(self) -> Result<Frame, FrameError> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    /// Number of rows shared by every column; a zero-column frame has zero
    /// rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    /// Column names in render order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.data.as_ref())
    }

    pub(crate) fn named_column(&self, name: &str) -> Option<&NamedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Builds an output frame with the same columns, each materialized by
    /// gathering the source rows at `indices`. All row-narrowing and
    /// row-reordering operators reduce to this.
    pub(crate) fn gather(&self, indices: &[usize]) -> Frame {
        Frame {
            columns: self
                .columns
                .iter()
                .map(|c| NamedColumn {
                    name: c.name.clone(),
                    data: Arc::new(c.data.gather(indices)),
                })
                .collect(),
            err: None,
        }
    }

    /// Projects the frame to `names`, preserving the requested order and all
    /// rows. An empty list yields a zero-column frame; an unknown name
    /// yields an errored frame (`UnknownColumn`).
    ///
    /// Column storage is shared with the source; no values are copied.
    pub fn select(&self, names: &[&str]) -> Frame {
        if let Some(err) = &self.err {
            return Frame::from_error(err.clone());
        }

        let mut columns = Vec::with_capacity(names.len());
        for &name in names {
            match self.named_column(name) {
                Some(col) => columns.push(col.clone()),
                None => return Frame::from_error(FrameError::UnknownColumn(name.to_string())),
            }
        }
        Frame { columns, err: None }
    }

    /// Restricts the frame to rows in the half-open interval `[start, end)`.
    ///
    /// Bounds outside `[0, row_count]` or `start > end` yield an errored
    /// frame (`IndexOutOfRange`).
    pub fn slice(&self, start: usize, end: usize) -> Frame {
        if let Some(err) = &self.err {
            return Frame::from_error(err.clone());
        }

        let row_count = self.row_count();
        if start > end || end > row_count {
            return Frame::from_error(FrameError::IndexOutOfRange {
                start,
                end,
                row_count,
            });
        }

        Frame {
            columns: self
                .columns
                .iter()
                .map(|c| NamedColumn {
                    name: c.name.clone(),
                    data: Arc::new(c.data.slice(start, end)),
                })
                .collect(),
            err: None,
        }
    }

    /// Compares two frames for equality: same column name set (order
    /// ignored), same row count, and pointwise-equal cells per column under
    /// the per-kind rule (NaN equals NaN, absent equals absent).
    ///
    /// On mismatch the returned reason pinpoints the first divergence; on
    /// equality it is empty. The reason string is a stable diagnostic
    /// contract used by tests.
    pub fn equals(&self, other: &Frame) -> (bool, String) {
        if self.columns.len() != other.columns.len() {
            return (
                false,
                format!(
                    "column count differs: {} != {}",
                    self.columns.len(),
                    other.columns.len()
                ),
            );
        }

        for col in &self.columns {
            if other.named_column(&col.name).is_none() {
                return (false, format!("missing column: {}", col.name));
            }
        }

        if self.row_count() != other.row_count() {
            return (
                false,
                format!(
                    "row count differs: {} != {}",
                    self.row_count(),
                    other.row_count()
                ),
            );
        }

        for col in &self.columns {
            // Present in both; checked above.
            let Some(other_col) = other.column(&col.name) else {
                return (false, format!("missing column: {}", col.name));
            };
            if col.data.data_type() != other_col.data_type() {
                return (
                    false,
                    format!(
                        "column {}: type differs, {} != {}",
                        col.name,
                        col.data.data_type(),
                        other_col.data_type()
                    ),
                );
            }
            if let Some(row) = col.data.first_mismatch(other_col) {
                return (
                    false,
                    format!(
                        "{}[{}]: {} != {}",
                        col.name,
                        row,
                        col.data.value(row),
                        other_col.value(row)
                    ),
                );
            }
        }

        (true, String::new())
    }
}
