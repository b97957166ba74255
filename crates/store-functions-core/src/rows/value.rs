// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Single-value rows.

use super::{VALUE_COLUMN, row_description};
use crate::types::{DescribeType, MemberDescription, TypeRef};

macro_rules! value_rows {
    ($($kind:ident($ty:ty): $value:ident, $indexed:ident, $regular:ident;)*) => {
        $(
            #[doc = concat!("Row with a single nullable `", stringify!($kind), "` value.")]
            #[derive(Debug, Clone, PartialEq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
            pub struct $value {
                /// The value.
                pub value: Option<$ty>
            }

            impl $value {
                /// Row holding `value`.
                pub fn new(value: impl Into<Option<$ty>>) -> Self {
                    Self {
                        value: value.into()
                    }
                }
            }

            impl DescribeType for $value {
                fn describe() -> TypeRef {
                    row_description(
                        stringify!($value),
                        concat!(module_path!(), "::", stringify!($value)),
                        vec![
                            MemberDescription::new("value", <Option<$ty>>::describe())
                                .with_column(VALUE_COLUMN)
                        ]
                    )
                }
            }
        )*
    };
}

row_table!(value_rows);
