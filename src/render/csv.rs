//! CSV rendering.

use std::io::Write;

use crate::error::FrameResult;
use crate::frame::Frame;

impl Frame {
    /// Writes the frame as delimited text: a header row followed by one
    /// record per row.
    ///
    /// Columns render in the frame's render order: alphabetical for
    /// map-constructed frames, header order for ingested ones. Fields
    /// containing the delimiter or quote character are quoted by the
    /// underlying writer; booleans render as `true`/`false`, NaN as `NaN`,
    /// absent text as the empty field.
    pub fn to_csv<W: Write>(&self, writer: W) -> FrameResult<()> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let mut out = ::csv::Writer::from_writer(writer);
        out.write_record(self.column_names())?;
        for row in 0..self.row_count() {
            out.write_record(self.columns.iter().map(|c| c.data.render(row)))?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::column::Column;
    use crate::frame::Frame;

    fn render(frame: &Frame) -> String {
        let mut buf = Vec::new();
        frame.to_csv(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_alphabetically_with_quoting() {
        let f = Frame::new([
            (
                "STRING1",
                Column::Text(vec![Some("a".to_string()), Some("b,c".to_string())]),
            ),
            ("INT1", Column::Int(vec![1, 2])),
            ("FLOAT1", Column::Float(vec![1.5, 2.5])),
            ("BOOL1", Column::Bool(vec![true, false])),
        ]);
        assert_eq!(
            render(&f),
            "BOOL1,FLOAT1,INT1,STRING1\ntrue,1.5,1,a\nfalse,2.5,2,\"b,c\"\n"
        );
    }

    #[test]
    fn renders_missing_values() {
        let f = Frame::new([
            ("f", Column::Float(vec![1.5, f64::NAN])),
            ("s", Column::Text(vec![None, Some("x".to_string())])),
        ]);
        assert_eq!(render(&f), "f,s\n1.5,\nNaN,x\n");
    }

    #[test]
    fn pending_error_surfaces_instead_of_output() {
        let errored = Frame::new([("a", Column::Int(vec![1]))]).select(&["nope"]);
        let mut buf = Vec::new();
        assert!(errored.to_csv(&mut buf).is_err());
        assert!(buf.is_empty());
    }
}
