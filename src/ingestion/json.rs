//! JSON ingestion.
//!
//! Accepts either of the two encodings produced by
//! [`crate::render::json`]:
//!
//! - column-oriented: an object of arrays, `{"a": [1, 2], "b": ["x", "y"]}`
//! - row-oriented: an array of objects, `[{"a": 1}, {"a": 2}]`
//!
//! A numeric array decodes as an int column when every literal is integral
//! and no value is null; otherwise it decodes as a float column with null as
//! NaN. String arrays decode as nullable text. Note that NaN *encoded* by
//! `to_json` is the bare token `NaN`, which is not valid JSON and is not
//! guaranteed to decode back; this is a documented one-way limitation.

use std::io::Read;

use serde_json::Value as Json;

use crate::column::Column;
use crate::error::FrameError;
use crate::frame::Frame;

/// Reads a frame from row- or column-oriented JSON.
///
/// Failures land in the frame's deferred-error slot.
pub fn read_json<R: Read>(reader: R) -> Frame {
    let root: Json = match serde_json::from_reader(reader) {
        Ok(v) => v,
        Err(err) => return Frame::from_error(err.into()),
    };

    let result = match root {
        Json::Object(map) => columns_from_object(map),
        Json::Array(rows) => columns_from_records(&rows),
        other => Err(FrameError::Json(format!(
            "expected an object of arrays or an array of objects, got {other}"
        ))),
    };

    match result {
        Ok(data) => Frame::new(data),
        Err(err) => Frame::from_error(err),
    }
}

fn columns_from_object(
    map: serde_json::Map<String, Json>,
) -> Result<Vec<(String, Column)>, FrameError> {
    let mut data = Vec::with_capacity(map.len());
    for (name, value) in map {
        let Json::Array(cells) = value else {
            return Err(FrameError::Json(format!(
                "column '{name}' is not an array"
            )));
        };
        let refs: Vec<&Json> = cells.iter().collect();
        data.push((name.clone(), column_from_cells(&name, &refs)?));
    }
    Ok(data)
}

fn columns_from_records(rows: &[Json]) -> Result<Vec<(String, Column)>, FrameError> {
    let mut names: Vec<String> = Vec::new();
    let mut cells: Vec<Vec<&Json>> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let Json::Object(obj) = row else {
            return Err(FrameError::Json(format!("row {i} is not an object")));
        };
        if i == 0 {
            names = obj.keys().cloned().collect();
            cells = vec![Vec::with_capacity(rows.len()); names.len()];
        } else if obj.len() != names.len() {
            return Err(FrameError::Json(format!(
                "row {i} has {} fields, expected {}",
                obj.len(),
                names.len()
            )));
        }
        for (name, column) in names.iter().zip(cells.iter_mut()) {
            let value = obj
                .get(name)
                .ok_or_else(|| FrameError::Json(format!("row {i} missing field '{name}'")))?;
            column.push(value);
        }
    }

    names
        .iter()
        .zip(&cells)
        .map(|(name, cells)| Ok((name.clone(), column_from_cells(name, cells)?)))
        .collect()
}

/// Infers a column kind from a set of JSON cells and converts them.
fn column_from_cells(name: &str, cells: &[&Json]) -> Result<Column, FrameError> {
    let mut has_null = false;
    let mut has_bool = false;
    let mut has_int = false;
    let mut has_float = false;
    let mut has_string = false;
    for cell in cells {
        match cell {
            Json::Null => has_null = true,
            Json::Bool(_) => has_bool = true,
            Json::Number(n) if n.is_i64() => has_int = true,
            Json::Number(_) => has_float = true,
            Json::String(_) => has_string = true,
            other => {
                return Err(FrameError::Json(format!(
                    "column '{name}': unsupported value {other}"
                )));
            }
        }
    }

    let numeric = has_int || has_float;
    if has_string && !numeric && !has_bool {
        return Ok(Column::Text(
            cells
                .iter()
                .map(|c| c.as_str().map(str::to_string))
                .collect(),
        ));
    }
    if has_bool && !numeric && !has_string && !has_null {
        let mut values = Vec::with_capacity(cells.len());
        for cell in cells {
            match cell.as_bool() {
                Some(b) => values.push(b),
                None => unreachable!("non-bool ruled out above"),
            }
        }
        return Ok(Column::Bool(values));
    }
    if numeric && !has_string && !has_bool {
        // Null forces a float column, NaN being the only numeric missing
        // value.
        if has_float || has_null {
            let values = cells
                .iter()
                .map(|c| c.as_f64().unwrap_or(f64::NAN))
                .collect();
            return Ok(Column::Float(values));
        }
        let mut values = Vec::with_capacity(cells.len());
        for cell in cells {
            match cell.as_i64() {
                Some(v) => values.push(v),
                None => unreachable!("non-int ruled out above"),
            }
        }
        return Ok(Column::Int(values));
    }
    if cells.is_empty() || (has_null && !numeric && !has_bool && !has_string) {
        // Only nulls (or nothing): a nullable text column is the most
        // permissive reading.
        return Ok(Column::Text(vec![None; cells.len()]));
    }

    Err(FrameError::Json(format!(
        "column '{name}' mixes incompatible value types"
    )))
}

#[cfg(test)]
mod tests {
    use super::read_json;
    use crate::column::Column;
    use crate::error::FrameError;
    use crate::frame::Frame;

    fn assert_frames_equal(actual: &Frame, expected: &Frame) {
        let (equal, reason) = expected.equals(actual);
        assert!(equal, "{reason}");
    }

    #[test]
    fn reads_column_oriented_objects() {
        let input =
            r#"{"STRING1": ["a", "b"], "INT1": [1, 2], "FLOAT1": [1.5, 2.5], "BOOL1": [true, false]}"#;
        let out = read_json(input.as_bytes());
        assert_frames_equal(
            &out,
            &Frame::new([
                (
                    "STRING1",
                    Column::Text(vec![Some("a".to_string()), Some("b".to_string())]),
                ),
                ("INT1", Column::Int(vec![1, 2])),
                ("FLOAT1", Column::Float(vec![1.5, 2.5])),
                ("BOOL1", Column::Bool(vec![true, false])),
            ]),
        );
    }

    #[test]
    fn reads_row_oriented_records() {
        let input = r#"[
            {"STRING1": "a", "INT1": 1, "FLOAT1": 1.5, "BOOL1": true},
            {"STRING1": "b", "INT1": 2, "FLOAT1": 2.5, "BOOL1": false}]"#;
        let out = read_json(input.as_bytes());
        assert_frames_equal(
            &out,
            &Frame::new([
                (
                    "STRING1",
                    Column::Text(vec![Some("a".to_string()), Some("b".to_string())]),
                ),
                ("INT1", Column::Int(vec![1, 2])),
                ("FLOAT1", Column::Float(vec![1.5, 2.5])),
                ("BOOL1", Column::Bool(vec![true, false])),
            ]),
        );
    }

    #[test]
    fn null_in_string_column_becomes_absent() {
        let out = read_json(r#"{"STRING1": ["FOO", null]}"#.as_bytes());
        assert_frames_equal(
            &out,
            &Frame::new([(
                "STRING1",
                Column::Text(vec![Some("FOO".to_string()), None]),
            )]),
        );

        let records = read_json(r#"[{"STRING1": "FOO"}, {"STRING1": null}]"#.as_bytes());
        assert_frames_equal(
            &records,
            &Frame::new([(
                "STRING1",
                Column::Text(vec![Some("FOO".to_string()), None]),
            )]),
        );
    }

    #[test]
    fn null_forces_numeric_column_to_float() {
        let out = read_json(r#"{"a": [1, null]}"#.as_bytes());
        assert_frames_equal(
            &out,
            &Frame::new([("a", Column::Float(vec![1.0, f64::NAN]))]),
        );
    }

    #[test]
    fn mixed_int_and_float_promotes_to_float() {
        let out = read_json(r#"{"a": [1, 2.5]}"#.as_bytes());
        assert_frames_equal(&out, &Frame::new([("a", Column::Float(vec![1.0, 2.5]))]));
    }

    #[test]
    fn mixed_string_and_number_is_an_error() {
        let out = read_json(r#"{"a": [1, "x"]}"#.as_bytes());
        assert!(matches!(out.err(), Some(FrameError::Json(_))));
    }

    #[test]
    fn malformed_json_is_deferred() {
        let out = read_json("{not json".as_bytes());
        assert!(matches!(out.err(), Some(FrameError::Json(_))));
    }

    #[test]
    fn record_rows_must_share_fields() {
        let out = read_json(r#"[{"a": 1}, {"b": 2}]"#.as_bytes());
        assert!(matches!(out.err(), Some(FrameError::Json(_))));
    }
}
