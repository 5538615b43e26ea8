use thiserror::Error;

use crate::{
    cursor::{ColumnType, ScanKind},
    record::{FieldKind, ValueError},
};

/// Boxed driver-side error carried out of a cursor.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can abort a decode call.
///
/// A failure is always terminal for the call; rows appended before the
/// failing row remain in the destination.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Two tagged fields of the destination type share one column tag.
    /// Raised before any cursor access.
    #[error("duplicate column tag `{tag}` on fields `{first}` and `{second}`")]
    DuplicateTag {
        /// The shared tag.
        tag: &'static str,
        /// First field declaring the tag.
        first: &'static str,
        /// Second field declaring the tag.
        second: &'static str,
    },
    /// Retrieving the cursor's column descriptors failed. Raised before
    /// any row is read.
    #[error("failed to read column descriptors: {0}")]
    Metadata(#[source] BoxedError),
    /// A column advertises a type with no scan-buffer mapping.
    #[error("column `{name}` advertises unsupported type {column_type}")]
    UnsupportedColumnType {
        /// Name of the offending column.
        name: String,
        /// The advertised type.
        column_type: ColumnType,
    },
    /// The cursor's step/scan protocol failed.
    #[error("scan failed: {0}")]
    Scan(#[source] BoxedError),
    /// A scanned value's kind is incompatible with its matched field.
    #[error(
        "type mismatch: field `{field}` is {field_kind}, column `{column}` scanned as {scan_kind}"
    )]
    TypeMismatch {
        /// Name of the scanned column.
        column: String,
        /// Name of the matched field.
        field: &'static str,
        /// The field's declared kind.
        field_kind: FieldKind,
        /// The scanned value's kind.
        scan_kind: ScanKind,
    },
    /// A lower-level fault while interpreting or storing a scanned value,
    /// caught at the row boundary.
    #[error("failed to store column `{column}` into field `{field}`: {source}")]
    Value {
        /// Name of the scanned column.
        column: String,
        /// Name of the matched field.
        field: &'static str,
        /// The underlying fault.
        #[source]
        source: ValueError,
    },
}
