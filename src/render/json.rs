//! JSON rendering.
//!
//! Output is hand-assembled rather than going through a serializer because
//! NaN must encode as the bare (non-standard) token `NaN`; `serde_json` is
//! still used for correct string escaping. Such output round-trips through
//! [`crate::ingestion::read_json`] except for NaN, which is a documented
//! one-way limitation.

use std::io::Write;

use crate::column::{Column, render_float};
use crate::error::FrameResult;
use crate::frame::Frame;

/// Orientation of JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Array of objects, one per row: `[{"a": 1}, {"a": 2}]`.
    Records,
    /// Object of arrays, one per column: `{"a": [1, 2]}`.
    Columns,
}

impl Frame {
    /// Writes the frame as JSON in the requested orientation, columns in the
    /// frame's render order. Floats encode NaN as the bare token `NaN`.
    pub fn to_json<W: Write>(&self, mut writer: W, format: JsonFormat) -> FrameResult<()> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let body = match format {
            JsonFormat::Records => self.render_records()?,
            JsonFormat::Columns => self.render_columns()?,
        };
        writer.write_all(body.as_bytes())?;
        Ok(())
    }

    fn render_records(&self) -> FrameResult<String> {
        let names: Vec<String> = self
            .columns
            .iter()
            .map(|c| serde_json::to_string(&c.name))
            .collect::<Result<_, _>>()?;

        let mut out = String::from("[");
        for row in 0..self.row_count() {
            if row > 0 {
                out.push(',');
            }
            out.push('{');
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&names[i]);
                out.push(':');
                out.push_str(&cell_json(&col.data, row)?);
            }
            out.push('}');
        }
        out.push(']');
        Ok(out)
    }

    fn render_columns(&self) -> FrameResult<String> {
        let mut out = String::from("{");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::to_string(&col.name)?);
            out.push_str(":[");
            for row in 0..col.data.len() {
                if row > 0 {
                    out.push(',');
                }
                out.push_str(&cell_json(&col.data, row)?);
            }
            out.push(']');
        }
        out.push('}');
        Ok(out)
    }
}

fn cell_json(column: &Column, row: usize) -> FrameResult<String> {
    Ok(match column {
        Column::Int(v) => v[row].to_string(),
        Column::Float(v) => render_float(v[row]),
        Column::Bool(v) => v[row].to_string(),
        Column::Text(v) => match &v[row] {
            Some(s) => serde_json::to_string(s)?,
            None => "null".to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::JsonFormat;
    use crate::column::Column;
    use crate::frame::Frame;

    fn render(frame: &Frame, format: JsonFormat) -> String {
        let mut buf = Vec::new();
        frame.to_json(&mut buf, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn nan_encodes_as_bare_token() {
        let f = Frame::new([("FLOAT1", Column::Float(vec![1.5, f64::NAN]))]);
        assert_eq!(
            render(&f, JsonFormat::Records),
            r#"[{"FLOAT1":1.5},{"FLOAT1":NaN}]"#
        );
        assert_eq!(render(&f, JsonFormat::Columns), r#"{"FLOAT1":[1.5,NaN]}"#);
    }

    #[test]
    fn strings_are_escaped_and_null_is_absent() {
        let f = Frame::new([(
            "s",
            Column::Text(vec![Some("a\"b".to_string()), None]),
        )]);
        assert_eq!(render(&f, JsonFormat::Columns), r#"{"s":["a\"b",null]}"#);
    }

    #[test]
    fn records_orientation_lists_one_object_per_row() {
        let f = Frame::new([
            ("a", Column::Int(vec![1, 2])),
            ("b", Column::Bool(vec![true, false])),
        ]);
        assert_eq!(
            render(&f, JsonFormat::Records),
            r#"[{"a":1,"b":true},{"a":2,"b":false}]"#
        );
    }
}
