//! Core data model types for the frame engine.
//!
//! A [`crate::frame::Frame`] is a set of named, equal-length
//! [`crate::column::Column`]s; each column holds values of exactly one
//! [`DataType`]. [`Value`] is the dynamically typed view of a single cell,
//! used for filter arguments and diagnostics.

use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;

/// Logical kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point number; NaN is the missing value.
    Float,
    /// Boolean.
    Bool,
    /// Nullable UTF-8 string; absence is distinct from the empty string.
    String,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
            DataType::String => "string",
        };
        f.write_str(name)
    }
}

impl FromStr for DataType {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(DataType::Int),
            "float" => Ok(DataType::Float),
            "bool" => Ok(DataType::Bool),
            "string" => Ok(DataType::String),
            other => Err(FrameError::UnknownDataType(other.to_string())),
        }
    }
}

/// A single typed cell value.
///
/// `Null` is the absent text cell; float missingness is `Float(f64::NAN)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent text cell.
    Null,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Present UTF-8 string.
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::DataType;
    use crate::error::FrameError;

    #[test]
    fn data_type_parses_known_names() {
        assert_eq!("int".parse::<DataType>().unwrap(), DataType::Int);
        assert_eq!("float".parse::<DataType>().unwrap(), DataType::Float);
        assert_eq!("bool".parse::<DataType>().unwrap(), DataType::Bool);
        assert_eq!("string".parse::<DataType>().unwrap(), DataType::String);
    }

    #[test]
    fn data_type_rejects_unknown_names() {
        let err = "enum".parse::<DataType>().unwrap_err();
        assert_eq!(err, FrameError::UnknownDataType("enum".to_string()));
        assert!(err.to_string().contains("unknown data type"));
    }

    #[test]
    fn data_type_display_round_trips() {
        for dt in [
            DataType::Int,
            DataType::Float,
            DataType::Bool,
            DataType::String,
        ] {
            assert_eq!(dt.to_string().parse::<DataType>().unwrap(), dt);
        }
    }
}
