//! Row filtering by comparator specs.
//!
//! A [`Filter`] names a column, a [`Comparator`], and an argument value.
//! Multiple filters passed to one [`Frame::filter`] call combine with
//! logical OR; AND composition is achieved by chaining calls, since each
//! call only ever narrows the rows it is applied to.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::column::{Column, float_cmp};
use crate::error::FrameError;
use crate::frame::Frame;
use crate::types::Value;

/// Comparison operator for a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
}

impl Comparator {
    fn token(self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Neq => "!=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
        }
    }

    /// Whether an ordering between cell and argument satisfies the
    /// comparator.
    fn accepts(self, ord: Ordering) -> bool {
        match self {
            Comparator::Eq => ord == Ordering::Equal,
            Comparator::Neq => ord != Ordering::Equal,
            Comparator::Lt => ord == Ordering::Less,
            Comparator::Lte => ord != Ordering::Greater,
            Comparator::Gt => ord == Ordering::Greater,
            Comparator::Gte => ord != Ordering::Less,
        }
    }

    /// Equality comparators are the only ones supported for bool columns.
    fn is_equality(self) -> bool {
        matches!(self, Comparator::Eq | Comparator::Neq)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Comparator {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Comparator::Eq),
            "!=" => Ok(Comparator::Neq),
            "<" => Ok(Comparator::Lt),
            "<=" => Ok(Comparator::Lte),
            ">" => Ok(Comparator::Gt),
            ">=" => Ok(Comparator::Gte),
            other => Err(FrameError::UnsupportedComparator(other.to_string())),
        }
    }
}

/// A single row-selection spec: `column comparator arg`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column the comparator applies to.
    pub column: String,
    /// Comparison operator.
    pub comparator: Comparator,
    /// Argument the cell is compared against; its kind must match the
    /// column's kind (`Value::Null` pairs with text columns).
    pub arg: Value,
}

impl Filter {
    /// Creates a filter spec.
    pub fn new(column: impl Into<String>, comparator: Comparator, arg: impl Into<Value>) -> Filter {
        Filter {
            column: column.into(),
            comparator,
            arg: arg.into(),
        }
    }
}

impl Frame {
    /// Keeps the rows matching *any* of `filters` (logical OR), preserving
    /// original row order. Chain successive calls for AND composition.
    ///
    /// Passing no filters returns the frame unchanged. An unknown column
    /// yields `UnknownColumn`; a comparator/kind pairing that is not
    /// supported (ordering comparators on bool columns, or an argument kind
    /// differing from the column kind) yields `UnsupportedComparator`. Both
    /// are deferred into the error slot.
    pub fn filter(&self, filters: &[Filter]) -> Frame {
        if let Some(err) = &self.err {
            return Frame::from_error(err.clone());
        }
        if filters.is_empty() {
            return self.clone();
        }

        let mut mask = vec![false; self.row_count()];
        for filter in filters {
            match apply_filter(self, filter, &mut mask) {
                Ok(()) => {}
                Err(err) => return Frame::from_error(err),
            }
        }

        let indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| keep.then_some(i))
            .collect();
        self.gather(&indices)
    }
}

/// Evaluates one filter spec, OR-ing matching rows into `mask`.
fn apply_filter(frame: &Frame, filter: &Filter, mask: &mut [bool]) -> Result<(), FrameError> {
    let column = frame
        .column(&filter.column)
        .ok_or_else(|| FrameError::UnknownColumn(filter.column.clone()))?;
    let cmp = filter.comparator;

    match (column, &filter.arg) {
        (Column::Int(values), Value::Int(arg)) => {
            for (i, v) in values.iter().enumerate() {
                if cmp.accepts(v.cmp(arg)) {
                    mask[i] = true;
                }
            }
        }
        (Column::Float(values), Value::Float(arg)) => {
            // Domain total order: NaN is minimal and equal to itself.
            for (i, v) in values.iter().enumerate() {
                if cmp.accepts(float_cmp(*v, *arg)) {
                    mask[i] = true;
                }
            }
        }
        (Column::Bool(values), Value::Bool(arg)) => {
            if !cmp.is_equality() {
                return Err(FrameError::UnsupportedComparator(format!(
                    "{} on bool column '{}'",
                    cmp, filter.column
                )));
            }
            for (i, v) in values.iter().enumerate() {
                if cmp.accepts(v.cmp(arg)) {
                    mask[i] = true;
                }
            }
        }
        (Column::Text(values), arg @ (Value::String(_) | Value::Null)) => {
            let arg = match arg {
                Value::String(s) => Some(s.clone()),
                _ => None,
            };
            // Absent sorts before every present value, including "".
            for (i, v) in values.iter().enumerate() {
                if cmp.accepts(v.cmp(&arg)) {
                    mask[i] = true;
                }
            }
        }
        (column, arg) => {
            return Err(FrameError::UnsupportedComparator(format!(
                "{} with {:?} argument on {} column '{}'",
                cmp,
                arg,
                column.data_type(),
                filter.column
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Comparator, Filter};
    use crate::column::Column;
    use crate::error::FrameError;
    use crate::frame::Frame;
    use crate::types::Value;

    fn assert_frames_equal(actual: &Frame, expected: &Frame) {
        let (equal, reason) = expected.equals(actual);
        assert!(equal, "{reason}");
    }

    fn ints() -> Frame {
        Frame::new([("COL1", Column::Int(vec![1, 2, 3, 4, 5]))])
    }

    #[test]
    fn single_filter_narrows_rows() {
        let out = ints().filter(&[Filter::new("COL1", Comparator::Gt, 3)]);
        assert_frames_equal(&out, &Frame::new([("COL1", Column::Int(vec![4, 5]))]));
    }

    #[test]
    fn filters_in_one_call_combine_with_or() {
        let out = ints().filter(&[
            Filter::new("COL1", Comparator::Gt, 4),
            Filter::new("COL1", Comparator::Lt, 2),
        ]);
        assert_frames_equal(&out, &Frame::new([("COL1", Column::Int(vec![1, 5]))]));
    }

    #[test]
    fn chained_calls_combine_with_and() {
        let out = ints()
            .filter(&[Filter::new("COL1", Comparator::Gt, 4)])
            .filter(&[Filter::new("COL1", Comparator::Lt, 2)]);
        assert!(out.err().is_none());
        assert_eq!(out.row_count(), 0);
    }

    #[test]
    fn no_filters_is_a_no_op() {
        let out = ints().filter(&[]);
        assert_frames_equal(&out, &ints());
    }

    #[test]
    fn text_filter_treats_absent_as_minimal() {
        let f = Frame::new([(
            "s",
            Column::Text(vec![Some("b".to_string()), None, Some("a".to_string())]),
        )]);
        let out = f.filter(&[Filter::new("s", Comparator::Lt, "b")]);
        assert_frames_equal(
            &out,
            &Frame::new([("s", Column::Text(vec![None, Some("a".to_string())]))]),
        );

        let nulls = f.filter(&[Filter::new("s", Comparator::Eq, Value::Null)]);
        assert_frames_equal(&nulls, &Frame::new([("s", Column::Text(vec![None]))]));
    }

    #[test]
    fn float_filter_uses_nan_minimal_order() {
        let f = Frame::new([("x", Column::Float(vec![1.0, f64::NAN, -1.0]))]);
        let out = f.filter(&[Filter::new("x", Comparator::Lt, 0.0)]);
        assert_frames_equal(
            &out,
            &Frame::new([("x", Column::Float(vec![f64::NAN, -1.0]))]),
        );
    }

    #[test]
    fn ordering_comparator_on_bool_is_unsupported() {
        let f = Frame::new([("b", Column::Bool(vec![true, false]))]);
        let out = f.filter(&[Filter::new("b", Comparator::Gt, false)]);
        assert!(matches!(
            out.err(),
            Some(FrameError::UnsupportedComparator(_))
        ));
    }

    #[test]
    fn argument_kind_must_match_column_kind() {
        let out = ints().filter(&[Filter::new("COL1", Comparator::Gt, 3.0)]);
        assert!(matches!(
            out.err(),
            Some(FrameError::UnsupportedComparator(_))
        ));
    }

    #[test]
    fn unknown_column_is_deferred() {
        let out = ints().filter(&[Filter::new("nope", Comparator::Gt, 3)]);
        assert_eq!(
            out.err(),
            Some(&FrameError::UnknownColumn("nope".to_string()))
        );
    }

    #[test]
    fn comparator_tokens_parse() {
        for (token, cmp) in [
            ("==", Comparator::Eq),
            ("!=", Comparator::Neq),
            ("<", Comparator::Lt),
            ("<=", Comparator::Lte),
            (">", Comparator::Gt),
            (">=", Comparator::Gte),
        ] {
            assert_eq!(token.parse::<Comparator>().unwrap(), cmp);
        }
        assert!(matches!(
            "=~".parse::<Comparator>(),
            Err(FrameError::UnsupportedComparator(_))
        ));
    }
}
