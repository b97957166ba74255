// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fixed-shape result rows.
//!
//! Ready-made row types for functions returning a single value per row,
//! optionally tagged with a position.
//!
//! | Family | Columns |
//! |--------|---------|
//! | `Value*Row` | `Value` |
//! | `Indexed*Row` | `Index`, `Value` |
//! | `RegularIndexed*Row` | `FlatIndex`, `IndicesBytes`, `Value` |
//!
//! Each family exists for `Boolean`, `Byte`, `DateTime`, `DateTimeOffset`,
//! `Decimal`, `Double`, `Guid`, `Int16`, `Int32`, `Int64`, `Single` and
//! `String` values. Every row implements
//! [`DescribeType`](crate::DescribeType), so it can be used as a function
//! result:
//!
//! ```rust
//! use store_functions_core::{DescribeType, TypeRef, rows::IndexedInt32Row};
//!
//! let TypeRef::Structural(desc) = IndexedInt32Row::describe() else {
//!     unreachable!()
//! };
//! let columns: Vec<_> = desc.members.iter().map(|m| m.column_name()).collect();
//! assert_eq!(columns, ["Index", "Value"]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! rows.rs (coordinator)
//! ├── codec.rs    - packed multi-dimensional index encoding
//! ├── value.rs    - Value*Row
//! ├── indexed.rs  - Indexed*Row
//! └── regular.rs  - RegularIndexed*Row
//! ```

/// Column holding the value of every row family.
pub const VALUE_COLUMN: &str = "Value";

/// Column holding the position of indexed rows.
pub const INDEX_COLUMN: &str = "Index";

/// Column holding the flat position of regular indexed rows.
pub const FLAT_INDEX_COLUMN: &str = "FlatIndex";

/// Column holding the packed indices of regular indexed rows.
pub const INDICES_COLUMN: &str = "IndicesBytes";

macro_rules! row_table {
    ($callback:ident) => {
        $callback! {
            Boolean(bool): ValueBooleanRow, IndexedBooleanRow, RegularIndexedBooleanRow;
            Byte(u8): ValueByteRow, IndexedByteRow, RegularIndexedByteRow;
            DateTime(chrono::NaiveDateTime):
                ValueDateTimeRow, IndexedDateTimeRow, RegularIndexedDateTimeRow;
            DateTimeOffset(chrono::DateTime<chrono::FixedOffset>):
                ValueDateTimeOffsetRow, IndexedDateTimeOffsetRow, RegularIndexedDateTimeOffsetRow;
            Decimal(rust_decimal::Decimal):
                ValueDecimalRow, IndexedDecimalRow, RegularIndexedDecimalRow;
            Double(f64): ValueDoubleRow, IndexedDoubleRow, RegularIndexedDoubleRow;
            Guid(uuid::Uuid): ValueGuidRow, IndexedGuidRow, RegularIndexedGuidRow;
            Int16(i16): ValueInt16Row, IndexedInt16Row, RegularIndexedInt16Row;
            Int32(i32): ValueInt32Row, IndexedInt32Row, RegularIndexedInt32Row;
            Int64(i64): ValueInt64Row, IndexedInt64Row, RegularIndexedInt64Row;
            Single(f32): ValueSingleRow, IndexedSingleRow, RegularIndexedSingleRow;
            String(String): ValueStringRow, IndexedStringRow, RegularIndexedStringRow;
        }
    };
}

mod codec;
mod indexed;
mod regular;
mod value;

pub use codec::{IndexArray, IndexCodecError};
pub use indexed::*;
pub use regular::*;
pub use value::*;

use crate::types::{MemberDescription, StructuralDescription, TypeRef};

fn row_description(name: &str, full_name: &str, members: Vec<MemberDescription>) -> TypeRef {
    TypeRef::Structural(StructuralDescription {
        name: name.to_string(),
        full_name: full_name.to_string(),
        members
    })
}
