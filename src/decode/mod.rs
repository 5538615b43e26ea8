//! The single-pass row decoding engine.
//!
//! [`decode_rows`] drains a [`Cursor`] into a `Vec` of records, one pass,
//! no state retained across calls. Per row it allocates one scan buffer
//! per column from the column's advertised type, lets the cursor fill
//! them, then joins each buffer to the destination field carrying the
//! column's name as its tag, converting on assignment.

mod error;

pub use error::{BoxedError, DecodeError};

use crate::{
    cursor::{ColumnDescriptor, ColumnType, Cursor, ElementType, ScanBuffer},
    logging::rowlink_log,
    record::{FieldDef, FieldKind, Record, Value, ValueError},
};

/// Decode every remaining row of `cursor` into `dest`, in row order.
///
/// Columns are matched to fields of `R` by tag; columns with no matching
/// tagged field are dropped without error. The call fails on the first
/// structural, metadata, unsupported-type, scan or mismatch error; rows
/// appended before the failing row remain in `dest` (the operation is not
/// transactional across rows).
pub fn decode_rows<C, R>(cursor: &mut C, dest: &mut Vec<R>) -> Result<(), DecodeError>
where
    C: Cursor,
    R: Record,
{
    let fields = R::fields();
    check_tags(fields)?;

    let columns = cursor
        .columns()
        .map_err(|err| DecodeError::Metadata(Box::new(err)))?;

    // Column -> field join, resolved once per call against the fixed
    // column list. Declaration order decides between candidates.
    let matches: Vec<Option<usize>> = columns
        .iter()
        .map(|column| fields.iter().position(|field| field.tag == column.name))
        .collect();

    rowlink_log!(
        log::Level::Debug,
        "decode_start",
        "columns={} tagged_fields={} matched={}",
        columns.len(),
        fields.len(),
        matches.iter().flatten().count(),
    );
    for (column, matched) in columns.iter().zip(&matches) {
        if matched.is_none() {
            rowlink_log!(
                log::Level::Trace,
                "column_dropped",
                "column={} no field carries its tag",
                column.name,
            );
        }
    }

    let mut appended = 0usize;
    while cursor
        .step()
        .map_err(|err| DecodeError::Scan(Box::new(err)))?
    {
        let mut buffers = Vec::with_capacity(columns.len());
        for column in &columns {
            buffers.push(buffer_for(column)?);
        }

        cursor
            .scan(&mut buffers)
            .map_err(|err| DecodeError::Scan(Box::new(err)))?;

        let mut record = R::default();
        for ((column, buffer), matched) in columns.iter().zip(buffers).zip(&matches) {
            let Some(index) = *matched else {
                continue;
            };
            assign(&mut record, &fields[index], index, column, buffer)?;
        }
        dest.push(record);
        appended += 1;
    }

    rowlink_log!(log::Level::Debug, "decode_done", "rows_appended={appended}");
    Ok(())
}

/// Reject destination types whose tagged fields share a tag; the
/// column -> field join must be unambiguous. Runs before any cursor
/// access.
fn check_tags(fields: &'static [FieldDef]) -> Result<(), DecodeError> {
    for (i, field) in fields.iter().enumerate() {
        if let Some(first) = fields[..i].iter().find(|other| other.tag == field.tag) {
            return Err(DecodeError::DuplicateTag {
                tag: field.tag,
                first: first.name,
                second: field.name,
            });
        }
    }
    Ok(())
}

/// Select the scan buffer for a column purely from its advertised type.
fn buffer_for(column: &ColumnDescriptor) -> Result<ScanBuffer, DecodeError> {
    match column.column_type {
        ColumnType::Int | ColumnType::Int32 | ColumnType::Int64 => Ok(ScanBuffer::Int(0)),
        ColumnType::Text => Ok(ScanBuffer::Text(String::new())),
        // Byte sequences are read as text; sequences of anything wider
        // have no buffer mapping.
        ColumnType::Sequence(ElementType::UInt8) => Ok(ScanBuffer::Text(String::new())),
        _ => Err(DecodeError::UnsupportedColumnType {
            name: column.name.clone(),
            column_type: column.column_type,
        }),
    }
}

/// Convert one scanned buffer to its matched field's kind and store it.
fn assign<R>(
    record: &mut R,
    field: &FieldDef,
    index: usize,
    column: &ColumnDescriptor,
    buffer: ScanBuffer,
) -> Result<(), DecodeError>
where
    R: Record,
{
    let scan_kind = buffer.kind();
    if !field.kind.accepts(scan_kind) {
        return Err(DecodeError::TypeMismatch {
            column: column.name.clone(),
            field: field.name,
            field_kind: field.kind,
            scan_kind,
        });
    }

    let value = convert(buffer, field.kind).map_err(|source| DecodeError::Value {
        column: column.name.clone(),
        field: field.name,
        source,
    })?;

    record.store(index, value).map_err(|source| DecodeError::Value {
        column: column.name.clone(),
        field: field.name,
        source,
    })
}

/// The conversion table from an accepted scan buffer to a field value.
/// Kind compatibility is checked by the caller; what remains fallible is
/// narrowing the widened integer to the field's representation.
fn convert(buffer: ScanBuffer, kind: FieldKind) -> Result<Value, ValueError> {
    match (kind, buffer) {
        (FieldKind::Int8, ScanBuffer::Int(v)) => Ok(Value::Int8(narrow(v, "i8")?)),
        (FieldKind::Int16, ScanBuffer::Int(v)) => Ok(Value::Int16(narrow(v, "i16")?)),
        (FieldKind::Int32, ScanBuffer::Int(v)) => Ok(Value::Int32(narrow(v, "i32")?)),
        (FieldKind::Int64, ScanBuffer::Int(v)) => Ok(Value::Int64(v)),
        (FieldKind::Text, ScanBuffer::Text(v)) => Ok(Value::Text(v)),
        (kind, buffer) => Err(ValueError::TypeMismatch {
            expected: kind.to_string(),
            actual: buffer.kind().to_string(),
        }),
    }
}

fn narrow<T>(value: i64, target: &'static str) -> Result<T, ValueError>
where
    T: TryFrom<i64>,
{
    T::try_from(value).map_err(|_| ValueError::OutOfRange { value, target })
}
