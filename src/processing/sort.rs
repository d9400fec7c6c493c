//! Stable multi-key sorting.

use std::cmp::Ordering;

use crate::column::Column;
use crate::error::FrameError;
use crate::frame::Frame;

/// One sort key: a column plus direction. Later keys break ties for earlier
/// ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Column to order by.
    pub column: String,
    /// Reverse (descending) order for this key only.
    pub reverse: bool,
}

impl Order {
    /// Ascending order on `column`.
    pub fn asc(column: impl Into<String>) -> Order {
        Order {
            column: column.into(),
            reverse: false,
        }
    }

    /// Descending order on `column`.
    pub fn desc(column: impl Into<String>) -> Order {
        Order {
            column: column.into(),
            reverse: true,
        }
    }
}

impl Frame {
    /// Produces a new frame with rows totally ordered by `orders`,
    /// left-to-right as primary key and tie-breakers.
    ///
    /// The sort is stable: rows whose full key tuple compares equal keep
    /// their original relative order. Per-kind ordering treats NaN and
    /// absent text as the minimum element; reversing a key reverses its
    /// comparison wholesale, so NaN/absent land last under `reverse`.
    ///
    /// An unknown key column yields `UnknownColumn` in the error slot.
    pub fn sort(&self, orders: &[Order]) -> Frame {
        if let Some(err) = &self.err {
            return Frame::from_error(err.clone());
        }

        let mut keys: Vec<(&Column, bool)> = Vec::with_capacity(orders.len());
        for order in orders {
            match self.column(&order.column) {
                Some(col) => keys.push((col, order.reverse)),
                None => {
                    return Frame::from_error(FrameError::UnknownColumn(order.column.clone()));
                }
            }
        }

        let mut indices: Vec<usize> = (0..self.row_count()).collect();
        indices.sort_by(|&a, &b| {
            for &(col, reverse) in &keys {
                let ord = col.cmp_rows(a, b);
                let ord = if reverse { ord.reverse() } else { ord };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });

        self.gather(&indices)
    }
}
