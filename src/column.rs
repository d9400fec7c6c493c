//! The typed column: a homogeneous, fixed-length sequence of values.
//!
//! `Column` is a closed tagged union over the four supported kinds. All
//! kind-specific logic (ordering, equality, gather, cell rendering) lives
//! here, so the operators in [`crate::processing`] stay kind-agnostic.
//!
//! Missing-value conventions:
//!
//! - Float columns use NaN as the sole missing value; for ordering it is
//!   treated as smaller than every finite value (and negative infinity), and
//!   for equality NaN equals NaN.
//! - Text columns are tri-state: `Some(text)` or `None` (absent). Absence
//!   sorts before every present value, equals only absence, and is distinct
//!   from the empty string.
//! - Int and bool columns have no missing value; every position is concrete.

use std::cmp::Ordering;

use crate::types::{DataType, Value};

/// A homogeneous, immutable, 0-indexed sequence of values of one kind.
#[derive(Debug, Clone)]
pub enum Column {
    /// 64-bit signed integers.
    Int(Vec<i64>),
    /// 64-bit floats; NaN marks a missing value.
    Float(Vec<f64>),
    /// Booleans; `false < true` for ordering.
    Bool(Vec<bool>),
    /// Nullable strings; `None` is absent and distinct from `Some("")`.
    Text(Vec<Option<String>>),
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Bool(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// Returns `true` if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind tag of this column.
    pub fn data_type(&self) -> DataType {
        match self {
            Column::Int(_) => DataType::Int,
            Column::Float(_) => DataType::Float,
            Column::Bool(_) => DataType::Bool,
            Column::Text(_) => DataType::String,
        }
    }

    /// Dynamically typed view of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn value(&self, index: usize) -> Value {
        match self {
            Column::Int(v) => Value::Int(v[index]),
            Column::Float(v) => Value::Float(v[index]),
            Column::Bool(v) => Value::Bool(v[index]),
            Column::Text(v) => match &v[index] {
                Some(s) => Value::String(s.clone()),
                None => Value::Null,
            },
        }
    }

    /// Compares the cells at `a` and `b` under the per-kind total order:
    /// standard order for ints, NaN-as-minimum for floats, `false < true`
    /// for bools, absent-first then lexicographic for text.
    pub fn cmp_rows(&self, a: usize, b: usize) -> Ordering {
        match self {
            Column::Int(v) => v[a].cmp(&v[b]),
            Column::Float(v) => float_cmp(v[a], v[b]),
            Column::Bool(v) => v[a].cmp(&v[b]),
            Column::Text(v) => v[a].cmp(&v[b]),
        }
    }

    /// Returns the first row index where `self` and `other` disagree under
    /// the per-kind equality rule (NaN equals NaN; absent equals absent).
    ///
    /// Both columns must have the same kind and length; differing kinds
    /// compare unequal at row 0 by convention of the caller.
    pub fn first_mismatch(&self, other: &Column) -> Option<usize> {
        match (self, other) {
            (Column::Int(a), Column::Int(b)) => a.iter().zip(b).position(|(x, y)| x != y),
            (Column::Float(a), Column::Float(b)) => {
                a.iter().zip(b).position(|(x, y)| !float_eq(*x, *y))
            }
            (Column::Bool(a), Column::Bool(b)) => a.iter().zip(b).position(|(x, y)| x != y),
            (Column::Text(a), Column::Text(b)) => a.iter().zip(b).position(|(x, y)| x != y),
            _ => Some(0),
        }
    }

    /// Materializes a new column by reading this column at each of `indices`
    /// in turn. This is the single primitive every row-narrowing or
    /// row-reordering operator reduces to.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn gather(&self, indices: &[usize]) -> Column {
        match self {
            Column::Int(v) => Column::Int(indices.iter().map(|&i| v[i]).collect()),
            Column::Float(v) => Column::Float(indices.iter().map(|&i| v[i]).collect()),
            Column::Bool(v) => Column::Bool(indices.iter().map(|&i| v[i]).collect()),
            Column::Text(v) => Column::Text(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }

    /// Materializes the contiguous row range `[start, end)` as a new column.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`; callers validate first.
    pub fn slice(&self, start: usize, end: usize) -> Column {
        match self {
            Column::Int(v) => Column::Int(v[start..end].to_vec()),
            Column::Float(v) => Column::Float(v[start..end].to_vec()),
            Column::Bool(v) => Column::Bool(v[start..end].to_vec()),
            Column::Text(v) => Column::Text(v[start..end].to_vec()),
        }
    }

    /// Renders the cell at `index` for CSV output: booleans as `true`/
    /// `false`, NaN as `NaN`, absent text as the empty string.
    pub fn render(&self, index: usize) -> String {
        match self {
            Column::Int(v) => v[index].to_string(),
            Column::Float(v) => render_float(v[index]),
            Column::Bool(v) => v[index].to_string(),
            Column::Text(v) => v[index].clone().unwrap_or_default(),
        }
    }

}

/// Total order over floats with NaN as the minimum element; NaN equals NaN.
pub(crate) fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Domain float equality: NaN equals NaN, everything else is IEEE equality.
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/// Float rendering used by the CSV and JSON boundaries: shortest
/// round-trippable decimal, NaN as the bare token `NaN`.
pub(crate) fn render_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        v.to_string()
    }
}
