use thiserror::Error;

/// Convenience result type for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Error type shared across construction, operators, ingestion and rendering.
///
/// Every variant carries owned strings so the enum is `Clone` and can live in
/// a frame's deferred-error slot (see [`crate::frame::Frame::err`]); errors
/// from `io`/`csv`/`serde_json` are captured as their display form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Underlying I/O error while reading or writing a stream.
    #[error("io error: {0}")]
    Io(String),

    /// Error reported by the CSV row tokenizer, propagated verbatim.
    #[error("csv error: {0}")]
    Csv(String),

    /// Malformed or structurally unexpected JSON input.
    #[error("json error: {0}")]
    Json(String),

    /// A column's raw values could not be converted to the target kind.
    ///
    /// `kind` names the kind being attempted (`int`, `float`, `bool`);
    /// callers match on it to tell which declared type failed.
    #[error("cannot create {kind} column: {cause}")]
    Parse { kind: String, cause: String },

    /// A column name was referenced that does not exist in the frame.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A declared type name is not one of `int`, `float`, `bool`, `string`.
    #[error("unknown data type: {0}")]
    UnknownDataType(String),

    /// Slice bounds fall outside `[0, row_count]` or start exceeds end.
    #[error("index out of range: [{start}, {end}) over {row_count} rows")]
    IndexOutOfRange {
        start: usize,
        end: usize,
        row_count: usize,
    },

    /// A comparator token is unrecognized, or the comparator/column-kind
    /// pairing is not supported.
    #[error("unsupported comparator: {0}")]
    UnsupportedComparator(String),

    /// Unknown aggregation function, or a column kind the requested function
    /// cannot aggregate.
    #[error("invalid aggregation: {0}")]
    InvalidAggregation(String),

    /// A CSV data row held a different number of fields than the header.
    #[error("row {row}: expected {expected} fields, found {actual}")]
    RowFieldCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Columns passed to frame construction do not all share one length.
    #[error("column '{column}' has length {actual}, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

impl From<std::io::Error> for FrameError {
    fn from(err: std::io::Error) -> Self {
        FrameError::Io(err.to_string())
    }
}

impl From<csv::Error> for FrameError {
    fn from(err: csv::Error) -> Self {
        FrameError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FrameError {
    fn from(err: serde_json::Error) -> Self {
        FrameError::Json(err.to_string())
    }
}
