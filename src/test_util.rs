//! In-memory cursor and fixture records for unit tests.

use std::fmt;

use crate::{
    cursor::{ColumnDescriptor, Cursor, ScanBuffer},
    record::{FieldDef, FieldKind, Record, Value, ValueError},
};

/// One pre-baked cell of a fixture row.
#[derive(Debug, Clone)]
pub(crate) enum Cell {
    Int(i64),
    Text(String),
}

/// Error type of [`RowsCursor`], standing in for a driver error.
#[derive(Debug)]
pub(crate) struct RowsError(String);

impl fmt::Display for RowsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RowsError {}

/// A cursor over pre-baked rows. `scan` enforces arity and cell/buffer
/// compatibility the way a real driver would.
pub(crate) struct RowsCursor {
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Vec<Cell>>,
    position: Option<usize>,
    columns_queried: usize,
    scans_issued: usize,
    fail_columns: bool,
}

impl RowsCursor {
    pub(crate) fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns,
            rows,
            position: None,
            columns_queried: 0,
            scans_issued: 0,
            fail_columns: false,
        }
    }

    /// Make `columns` fail, standing in for a metadata retrieval fault.
    pub(crate) fn failing_columns(mut self) -> Self {
        self.fail_columns = true;
        self
    }

    pub(crate) fn columns_queried(&self) -> usize {
        self.columns_queried
    }

    pub(crate) fn scans_issued(&self) -> usize {
        self.scans_issued
    }
}

impl Cursor for RowsCursor {
    type Error = RowsError;

    fn columns(&mut self) -> Result<Vec<ColumnDescriptor>, Self::Error> {
        self.columns_queried += 1;
        if self.fail_columns {
            return Err(RowsError("metadata unavailable".into()));
        }
        Ok(self.columns.clone())
    }

    fn step(&mut self) -> Result<bool, Self::Error> {
        let next = self.position.map_or(0, |pos| pos + 1);
        if next < self.rows.len() {
            self.position = Some(next);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn scan(&mut self, buffers: &mut [ScanBuffer]) -> Result<(), Self::Error> {
        self.scans_issued += 1;
        let Some(position) = self.position else {
            return Err(RowsError("scan before step".into()));
        };
        let row = &self.rows[position];
        if row.len() != buffers.len() {
            return Err(RowsError(format!(
                "expected {} buffers, got {}",
                row.len(),
                buffers.len()
            )));
        }
        for (cell, buffer) in row.iter().zip(buffers) {
            match (cell, buffer) {
                (Cell::Int(v), ScanBuffer::Int(slot)) => *slot = *v,
                (Cell::Text(v), ScanBuffer::Text(slot)) => slot.clone_from(v),
                (cell, buffer) => {
                    return Err(RowsError(format!(
                        "cannot scan {cell:?} into {} buffer",
                        buffer.kind()
                    )))
                }
            }
        }
        Ok(())
    }
}

/// Hand-written two-field record used across unit tests.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Pair {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl Record for Pair {
    fn fields() -> &'static [FieldDef] {
        const FIELDS: &[FieldDef] = &[
            FieldDef {
                name: "id",
                tag: "id",
                kind: FieldKind::Int64,
            },
            FieldDef {
                name: "name",
                tag: "name",
                kind: FieldKind::Text,
            },
        ];
        FIELDS
    }

    fn store(&mut self, index: usize, value: Value) -> Result<(), ValueError> {
        match index {
            0 => self.id = value.into_i64()?,
            1 => self.name = value.into_text()?,
            _ => return Err(ValueError::InvalidFieldIndex(index)),
        }
        Ok(())
    }
}
