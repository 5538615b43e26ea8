#![deny(missing_docs)]
//! Decode tabular query results into tagged, typed Rust records.
//!
//! The crate sits between a raw tabular data source and typed application
//! data: a [`Cursor`] advertises an ordered list of typed columns and a
//! step/scan protocol, and [`decode_rows`] drains it into a `Vec` of any
//! type implementing [`Record`], joining columns to fields by the column
//! tag each field carries.
//!
//! ```rust,ignore
//! use rowlink::{decode_rows, Record};
//!
//! #[derive(Debug, Default, Record)]
//! struct User {
//!     #[row(column = "id")]
//!     id: i64,
//!     #[row(column = "name")]
//!     name: String,
//! }
//!
//! let mut users = Vec::new();
//! decode_rows(&mut cursor, &mut users)?;
//! ```

mod logging;

/// Cursor protocol: column descriptors, scan buffers and the step/scan trait.
pub mod cursor;

/// The row decoding engine and its error taxonomy.
pub mod decode;

/// Destination capability: record trait, field descriptors and values.
pub mod record;

#[cfg(test)]
mod test_util;

pub use rowlink_macros::Record;

pub use crate::{
    cursor::{ColumnDescriptor, ColumnType, Cursor, ElementType, ScanBuffer, ScanKind},
    decode::{decode_rows, BoxedError, DecodeError},
    record::{FieldDef, FieldKind, Record, Value, ValueError},
};
