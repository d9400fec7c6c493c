//! Grouping, aggregation and duplicate removal.
//!
//! Rows are partitioned by equality of the grouping columns' values, using
//! the same per-kind equality rule as frame comparison (NaN equals NaN,
//! absent equals absent). Group output order is first-occurrence order of
//! each distinct key while scanning rows top-to-bottom, never incidental
//! hash iteration order.

use std::collections::HashMap;

use crate::column::Column;
use crate::error::FrameError;
use crate::frame::Frame;

/// Hashable stand-in for one cell inside a grouping key.
///
/// Floats are keyed by canonical bit pattern so that NaN groups with NaN and
/// `-0.0` groups with `0.0`, matching the domain equality rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyValue {
    Int(i64),
    Float(u64),
    Bool(bool),
    Text(Option<String>),
}

fn key_value(column: &Column, row: usize) -> KeyValue {
    match column {
        Column::Int(v) => KeyValue::Int(v[row]),
        Column::Float(v) => KeyValue::Float(canonical_bits(v[row])),
        Column::Bool(v) => KeyValue::Bool(v[row]),
        Column::Text(v) => KeyValue::Text(v[row].clone()),
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0_f64.to_bits()
    } else {
        v.to_bits()
    }
}

/// Partitions `row_count` rows by their key over `columns`, returning each
/// group's member row indices in first-occurrence order.
fn partition(columns: &[&Column], row_count: usize) -> Vec<Vec<usize>> {
    let mut lookup: HashMap<Vec<KeyValue>, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for row in 0..row_count {
        let key: Vec<KeyValue> = columns.iter().map(|col| key_value(col, row)).collect();
        match lookup.get(&key) {
            Some(&group) => groups[group].push(row),
            None => {
                lookup.insert(key, groups.len());
                groups.push(vec![row]);
            }
        }
    }
    groups
}

/// A frame partitioned by a set of grouping columns, awaiting aggregation.
///
/// Produced by [`Frame::group_by`]; carries the source frame's deferred
/// error forward like any operator.
#[derive(Debug, Clone)]
pub struct Groups {
    frame: Frame,
    by: Vec<String>,
    err: Option<FrameError>,
}

impl Frame {
    /// Partitions rows into groups keyed by the named columns.
    ///
    /// The handle defers failure: an unknown grouping column surfaces when
    /// the subsequent [`Groups::aggregate`] result is checked.
    pub fn group_by(&self, names: &[&str]) -> Groups {
        let err = self.err.clone().or_else(|| {
            names
                .iter()
                .find(|&&name| self.column(name).is_none())
                .map(|&name| FrameError::UnknownColumn(name.to_string()))
        });
        Groups {
            frame: self.clone(),
            by: names.iter().map(|&n| n.to_string()).collect(),
            err,
        }
    }

    /// Returns the rows with a unique combination of values across all
    /// columns, keeping the first occurrence in original row order.
    ///
    /// Equivalent to grouping by every column and taking each group's
    /// representative row. Idempotent.
    pub fn distinct(&self) -> Frame {
        if let Some(err) = &self.err {
            return Frame::from_error(err.clone());
        }

        let columns: Vec<&Column> = self.columns.iter().map(|c| c.data.as_ref()).collect();
        let first_rows: Vec<usize> = partition(&columns, self.row_count())
            .into_iter()
            .map(|members| members[0])
            .collect();
        self.gather(&first_rows)
    }
}

impl Groups {
    /// Aggregates `column` with the function named by `func` (`sum`,
    /// `count`, `min`, `max`), producing one row per distinct group: the
    /// grouping-column values plus the aggregate.
    ///
    /// `sum`/`min`/`max` require an int or float column; `count` accepts any
    /// kind and yields an int column of group sizes. An unknown function
    /// name or an incompatible column kind yields `InvalidAggregation`; an
    /// empty input yields an empty frame with the full output schema.
    pub fn aggregate(&self, func: &str, column: &str) -> Frame {
        if let Some(err) = &self.err {
            return Frame::from_error(err.clone());
        }
        if self.by.iter().any(|name| name == column) {
            return Frame::from_error(FrameError::InvalidAggregation(format!(
                "cannot aggregate grouping column '{column}'"
            )));
        }
        let Some(target) = self.frame.column(column) else {
            return Frame::from_error(FrameError::UnknownColumn(column.to_string()));
        };

        // Grouping columns were validated in group_by.
        let key_columns: Vec<&Column> = self
            .by
            .iter()
            .filter_map(|name| self.frame.column(name))
            .collect();
        let groups = partition(&key_columns, self.frame.row_count());
        let first_rows: Vec<usize> = groups.iter().map(|members| members[0]).collect();

        let aggregated = match aggregate_column(target, func, column, &groups) {
            Ok(col) => col,
            Err(err) => return Frame::from_error(err),
        };

        let mut data: Vec<(String, Column)> = self
            .by
            .iter()
            .zip(&key_columns)
            .map(|(name, col)| (name.clone(), col.gather(&first_rows)))
            .collect();
        data.push((column.to_string(), aggregated));

        let order: Vec<&str> = self
            .by
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(column))
            .collect();
        Frame::with_order(data, &order)
    }
}

fn aggregate_column(
    target: &Column,
    func: &str,
    name: &str,
    groups: &[Vec<usize>],
) -> Result<Column, FrameError> {
    match func {
        "sum" => match target {
            Column::Int(v) => Ok(Column::Int(
                groups
                    .iter()
                    .map(|members| members.iter().map(|&i| v[i]).sum())
                    .collect(),
            )),
            Column::Float(v) => Ok(Column::Float(
                groups
                    .iter()
                    .map(|members| members.iter().map(|&i| v[i]).sum())
                    .collect(),
            )),
            other => Err(FrameError::InvalidAggregation(format!(
                "cannot sum {} column '{name}'",
                other.data_type()
            ))),
        },
        "count" => Ok(Column::Int(
            groups.iter().map(|members| members.len() as i64).collect(),
        )),
        "min" | "max" => extremum_column(target, func, name, groups),
        other => Err(FrameError::InvalidAggregation(format!(
            "unknown aggregation function: {other}"
        ))),
    }
}

/// `min`/`max` under the per-kind total order; for floats NaN is the
/// minimum, so a group containing NaN has NaN as its `min`.
fn extremum_column(
    target: &Column,
    func: &str,
    name: &str,
    groups: &[Vec<usize>],
) -> Result<Column, FrameError> {
    let want_min = func == "min";
    match target {
        Column::Int(v) => Ok(Column::Int(
            groups
                .iter()
                .map(|members| {
                    let it = members.iter().map(|&i| v[i]);
                    if want_min {
                        it.min().unwrap_or_default()
                    } else {
                        it.max().unwrap_or_default()
                    }
                })
                .collect(),
        )),
        Column::Float(v) => Ok(Column::Float(
            groups
                .iter()
                .map(|members| {
                    members
                        .iter()
                        .map(|&i| v[i])
                        .reduce(|best, x| {
                            let keep_x = crate::column::float_cmp(x, best)
                                == if want_min {
                                    std::cmp::Ordering::Less
                                } else {
                                    std::cmp::Ordering::Greater
                                };
                            if keep_x { x } else { best }
                        })
                        .unwrap_or(f64::NAN)
                })
                .collect(),
        )),
        other => Err(FrameError::InvalidAggregation(format!(
            "cannot take {func} of {} column '{name}'",
            other.data_type()
        ))),
    }
}
