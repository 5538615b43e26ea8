//! The input side of a decode call.
//!
//! A [`Cursor`] is an external collaborator representing a positioned query
//! result: it advertises its columns once, then is advanced row by row with
//! [`Cursor::step`] and drained with [`Cursor::scan`] into caller-allocated
//! [`ScanBuffer`]s. Column descriptors are only valid for the duration of
//! one decode call and are never retained.

use std::fmt;

/// Advertised scan type of one result column.
///
/// Only a subset of these is decodable; the remaining variants exist so a
/// driver can advertise them and the decoder can reject them with an
/// unsupported-column-type error instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Driver-generic signed integer of unspecified width.
    Int,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Boolean.
    Boolean,
    /// Text.
    Text,
    /// Raw sequence of elements, e.g. a blob column surfaced as `Vec<u8>`.
    Sequence(ElementType),
}

/// Element type of a [`ColumnType::Sequence`] column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// A single byte. Byte sequences are decoded as text.
    UInt8,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Boolean.
    Boolean,
    /// Text.
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int => write!(f, "int"),
            ColumnType::Int32 => write!(f, "int32"),
            ColumnType::Int64 => write!(f, "int64"),
            ColumnType::Float32 => write!(f, "float32"),
            ColumnType::Float64 => write!(f, "float64"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Sequence(element) => write!(f, "sequence of {element}"),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::UInt8 => write!(f, "uint8"),
            ElementType::Int8 => write!(f, "int8"),
            ElementType::Int16 => write!(f, "int16"),
            ElementType::Int32 => write!(f, "int32"),
            ElementType::Int64 => write!(f, "int64"),
            ElementType::Float32 => write!(f, "float32"),
            ElementType::Float64 => write!(f, "float64"),
            ElementType::Boolean => write!(f, "boolean"),
            ElementType::Text => write!(f, "text"),
        }
    }
}

/// Metadata for one position in each row: a name used as the join key
/// against field tags, and the advertised scan type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name, matched against [`crate::record::FieldDef::tag`].
    pub name: String,
    /// Advertised scan type.
    pub column_type: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new column descriptor.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Transient typed cell the cursor writes one column of the current row
/// into. One buffer exists per column, allocated fresh for every row.
///
/// Integer columns of any supported width share the [`ScanBuffer::Int`]
/// variant, widened to the widest supported signed integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanBuffer {
    /// Integer cell.
    Int(i64),
    /// Text cell. Byte-sequence columns also scan into this variant.
    Text(String),
}

impl ScanBuffer {
    /// The scanned kind of this buffer, as named in mismatch errors.
    pub fn kind(&self) -> ScanKind {
        match self {
            ScanBuffer::Int(_) => ScanKind::Int,
            ScanBuffer::Text(_) => ScanKind::Text,
        }
    }
}

/// Kind of a scanned value, the input side of the conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanKind {
    /// Signed integer, any supported width.
    Int,
    /// Text.
    Text,
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanKind::Int => write!(f, "integer"),
            ScanKind::Text => write!(f, "text"),
        }
    }
}

/// A streaming, server-side positioned query result.
///
/// The decoder queries [`Cursor::columns`] once per call, then alternates
/// [`Cursor::step`] and [`Cursor::scan`] until the cursor is exhausted.
/// Checking that the buffer slice matches the current row in arity and
/// type is the cursor's responsibility; an incompatibility is reported
/// through its own error type and surfaces as a scan error.
pub trait Cursor {
    /// Driver-side error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ordered descriptors for every column of the result.
    fn columns(&mut self) -> Result<Vec<ColumnDescriptor>, Self::Error>;

    /// Advance to the next row. Returns `false` once the result is
    /// exhausted.
    fn step(&mut self) -> Result<bool, Self::Error>;

    /// Fill `buffers` from the current row, one buffer per column in
    /// column order.
    fn scan(&mut self, buffers: &mut [ScanBuffer]) -> Result<(), Self::Error>;
}
