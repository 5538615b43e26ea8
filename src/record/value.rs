use thiserror::Error;

use crate::record::FieldKind;

/// Error raised while interpreting or storing a converted value.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The value's kind does not match the requested representation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The requested kind.
        expected: String,
        /// The kind actually carried.
        actual: String,
    },
    /// A widened integer does not fit the field's representation.
    #[error("integer {value} out of range for {target}")]
    OutOfRange {
        /// The scanned value.
        value: i64,
        /// The target representation.
        target: &'static str,
    },
    /// No tagged field exists at the given descriptor index.
    #[error("no tagged field at index {0}")]
    InvalidFieldIndex(usize),
}

/// A converted field value, ready to be stored into a record.
///
/// Unlike a [`crate::cursor::ScanBuffer`], which holds whatever the cursor
/// scanned, a `Value` already has the exact representation of the field it
/// is destined for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Owned text.
    Text(String),
}

impl Value {
    /// The field kind this value carries.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Int8(_) => FieldKind::Int8,
            Value::Int16(_) => FieldKind::Int16,
            Value::Int32(_) => FieldKind::Int32,
            Value::Int64(_) => FieldKind::Int64,
            Value::Text(_) => FieldKind::Text,
        }
    }

    /// Take the value as `i8`.
    pub fn into_i8(self) -> Result<i8, ValueError> {
        match self {
            Value::Int8(v) => Ok(v),
            other => Err(other.mismatch(FieldKind::Int8)),
        }
    }

    /// Take the value as `i16`.
    pub fn into_i16(self) -> Result<i16, ValueError> {
        match self {
            Value::Int16(v) => Ok(v),
            other => Err(other.mismatch(FieldKind::Int16)),
        }
    }

    /// Take the value as `i32`.
    pub fn into_i32(self) -> Result<i32, ValueError> {
        match self {
            Value::Int32(v) => Ok(v),
            other => Err(other.mismatch(FieldKind::Int32)),
        }
    }

    /// Take the value as `i64`.
    pub fn into_i64(self) -> Result<i64, ValueError> {
        match self {
            Value::Int64(v) => Ok(v),
            other => Err(other.mismatch(FieldKind::Int64)),
        }
    }

    /// Take the value as owned text.
    pub fn into_text(self) -> Result<String, ValueError> {
        match self {
            Value::Text(v) => Ok(v),
            other => Err(other.mismatch(FieldKind::Text)),
        }
    }

    fn mismatch(&self, expected: FieldKind) -> ValueError {
        ValueError::TypeMismatch {
            expected: expected.to_string(),
            actual: self.kind().to_string(),
        }
    }
}
