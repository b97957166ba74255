// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rows tagged with a one-dimensional position.

use super::{INDEX_COLUMN, VALUE_COLUMN, row_description};
use crate::types::{DescribeType, MemberDescription, TypeRef};

macro_rules! indexed_rows {
    ($($kind:ident($ty:ty): $value:ident, $indexed:ident, $regular:ident;)*) => {
        $(
            #[doc = concat!("Row with a position and a nullable `", stringify!($kind), "` value.")]
            #[derive(Debug, Clone, PartialEq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
            pub struct $indexed {
                /// Position of the value.
                pub index: i32,
                /// The value.
                pub value: Option<$ty>
            }

            impl $indexed {
                /// Row holding `value` at `index`.
                pub fn new(index: i32, value: impl Into<Option<$ty>>) -> Self {
                    Self {
                        index,
                        value: value.into()
                    }
                }
            }

            impl DescribeType for $indexed {
                fn describe() -> TypeRef {
                    row_description(
                        stringify!($indexed),
                        concat!(module_path!(), "::", stringify!($indexed)),
                        vec![
                            MemberDescription::new("index", <i32>::describe())
                                .with_column(INDEX_COLUMN),
                            MemberDescription::new("value", <Option<$ty>>::describe())
                                .with_column(VALUE_COLUMN),
                        ]
                    )
                }
            }
        )*
    };
}

row_table!(indexed_rows);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    #[test]
    fn index_then_value() {
        let TypeRef::Structural(desc) = IndexedDecimalRow::describe() else {
            panic!("expected a struct");
        };
        let columns: Vec<_> = desc.members.iter().map(|m| m.column_name()).collect();
        assert_eq!(columns, ["Index", "Value"]);
        assert_eq!(desc.members[0].ty, TypeRef::Primitive(PrimitiveKind::Int32));
        assert!(desc.members[1].ty.is_nullable());
    }

    #[test]
    fn constructor() {
        let row = IndexedGuidRow::new(3, uuid::Uuid::nil());
        assert_eq!(row.index, 3);
        assert_eq!(row.value, Some(uuid::Uuid::nil()));
        assert_eq!(IndexedBooleanRow::new(1, None).value, None);
    }
}
