//! CSV ingestion with automatic type inference.
//!
//! Processing is a single forward pass. The header row names the columns;
//! each data row's raw byte fields are appended into one growing byte buffer
//! per column, with a parallel list of (start, end) offsets, so no per-cell
//! string is allocated until the final typed conversion. After the scan each
//! column converts to a typed [`Column`]: via its declared type if one was
//! given, otherwise by trying int → float → bool → string and accepting the
//! first kind that parses every row.

use std::collections::HashMap;
use std::io::Read;

use crate::column::Column;
use crate::error::FrameError;
use crate::frame::Frame;
use crate::types::DataType;

/// Options for [`read_csv`].
#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Treat an empty text field as absent rather than as the empty string.
    /// Does not affect float columns, where an empty field is always NaN.
    pub empty_null: bool,
    /// Declared type name per column (`int`, `float`, `bool`, `string`).
    /// A declared column tries exactly that kind and fails hard on any
    /// unparsable row; columns not listed here use the inference cascade.
    pub types: HashMap<String, String>,
}

/// Byte range of one field inside a column's shared buffer.
#[derive(Debug, Clone, Copy)]
struct FieldSpan {
    start: usize,
    end: usize,
}

/// Reads delimited text with a header row into a [`Frame`].
///
/// The returned frame's columns keep header order for rendering. Failures
/// (tokenizer errors, a row whose field count disagrees with the header,
/// declared-type parse failures, or an unknown declared type name) land in
/// the frame's deferred-error slot.
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Frame {
    let mut tokenizer = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = match tokenizer.byte_headers() {
        Ok(record) => record
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect(),
        Err(err) => return Frame::from_error(err.into()),
    };

    let mut buffers: Vec<Vec<u8>> = vec![Vec::new(); headers.len()];
    let mut spans: Vec<Vec<FieldSpan>> = vec![Vec::new(); headers.len()];

    for (row, result) in tokenizer.byte_records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => return Frame::from_error(err.into()),
        };
        if record.len() != headers.len() {
            return Frame::from_error(FrameError::RowFieldCountMismatch {
                row: row + 1,
                expected: headers.len(),
                actual: record.len(),
            });
        }
        for (i, field) in record.iter().enumerate() {
            let start = buffers[i].len();
            buffers[i].extend_from_slice(field);
            spans[i].push(FieldSpan {
                start,
                end: buffers[i].len(),
            });
        }
    }

    let mut data: Vec<(String, Column)> = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let declared = match options.types.get(header) {
            Some(name) => match name.parse::<DataType>() {
                Ok(dt) => Some(dt),
                Err(err) => return Frame::from_error(err),
            },
            None => None,
        };
        match typed_column(&buffers[i], &spans[i], options.empty_null, declared) {
            Ok(column) => data.push((header.clone(), column)),
            Err(err) => return Frame::from_error(err),
        }
    }

    let order: Vec<&str> = headers.iter().map(String::as_str).collect();
    Frame::with_order(data, &order)
}

/// Converts one column's collected bytes to a typed column.
///
/// With a declared type, exactly that kind is tried and any parse failure is
/// reported verbatim, tagged with the kind's name. Without one, the cascade
/// tries int, float, bool and finally string, which always succeeds.
fn typed_column(
    bytes: &[u8],
    spans: &[FieldSpan],
    empty_null: bool,
    declared: Option<DataType>,
) -> Result<Column, FrameError> {
    if matches!(declared, Some(DataType::Int) | None) {
        match parse_int_column(bytes, spans) {
            Ok(column) => return Ok(column),
            Err(cause) => {
                if declared == Some(DataType::Int) {
                    return Err(parse_error(DataType::Int, cause));
                }
            }
        }
    }

    if matches!(declared, Some(DataType::Float) | None) {
        match parse_float_column(bytes, spans) {
            Ok(column) => return Ok(column),
            Err(cause) => {
                if declared == Some(DataType::Float) {
                    return Err(parse_error(DataType::Float, cause));
                }
            }
        }
    }

    if matches!(declared, Some(DataType::Bool) | None) {
        match parse_bool_column(bytes, spans) {
            Ok(column) => return Ok(column),
            Err(cause) => {
                if declared == Some(DataType::Bool) {
                    return Err(parse_error(DataType::Bool, cause));
                }
            }
        }
    }

    Ok(parse_text_column(bytes, spans, empty_null))
}

fn parse_error(kind: DataType, cause: String) -> FrameError {
    FrameError::Parse {
        kind: kind.to_string(),
        cause,
    }
}

fn field<'a>(bytes: &'a [u8], span: &FieldSpan) -> &'a [u8] {
    &bytes[span.start..span.end]
}

fn utf8_field<'a>(bytes: &'a [u8], span: &FieldSpan) -> Result<&'a str, String> {
    std::str::from_utf8(field(bytes, span)).map_err(|e| e.to_string())
}

fn parse_int_column(bytes: &[u8], spans: &[FieldSpan]) -> Result<Column, String> {
    let mut values = Vec::with_capacity(spans.len());
    for span in spans {
        let s = utf8_field(bytes, span)?;
        let v = s
            .parse::<i64>()
            .map_err(|e| format!("'{s}' is not an int: {e}"))?;
        values.push(v);
    }
    Ok(Column::Int(values))
}

fn parse_float_column(bytes: &[u8], spans: &[FieldSpan]) -> Result<Column, String> {
    let mut values = Vec::with_capacity(spans.len());
    for span in spans {
        // An empty field is the float missing value, always.
        if span.start == span.end {
            values.push(f64::NAN);
            continue;
        }
        let s = utf8_field(bytes, span)?;
        let v = s
            .parse::<f64>()
            .map_err(|e| format!("'{s}' is not a float: {e}"))?;
        values.push(v);
    }
    Ok(Column::Float(values))
}

fn parse_bool_column(bytes: &[u8], spans: &[FieldSpan]) -> Result<Column, String> {
    let mut values = Vec::with_capacity(spans.len());
    for span in spans {
        let s = utf8_field(bytes, span)?;
        values.push(parse_bool(s)?);
    }
    Ok(Column::Bool(values))
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err(format!("'{s}' is not a bool (true/false/1/0/yes/no)")),
    }
}

fn parse_text_column(bytes: &[u8], spans: &[FieldSpan], empty_null: bool) -> Column {
    let values = spans
        .iter()
        .map(|span| {
            if span.start == span.end && empty_null {
                None
            } else {
                Some(String::from_utf8_lossy(field(bytes, span)).into_owned())
            }
        })
        .collect();
    Column::Text(values)
}
