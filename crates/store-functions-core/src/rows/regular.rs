// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rows tagged with a position in a regular multi-dimensional array.
//!
//! The indices are exposed as an [`IndexArray`] and stored packed in the
//! `IndicesBytes` column. With the `serde` feature the row serializes the
//! packed form under the same name.

use super::{
    FLAT_INDEX_COLUMN, INDICES_COLUMN, VALUE_COLUMN,
    codec::{IndexArray, IndexCodecError},
    row_description
};
use crate::types::{DescribeType, MemberDescription, TypeRef};

macro_rules! regular_rows {
    ($($kind:ident($ty:ty): $value:ident, $indexed:ident, $regular:ident;)*) => {
        $(
            #[doc = concat!(
                "Row with a flat position, per-dimension indices and a nullable `",
                stringify!($kind),
                "` value."
            )]
            #[derive(Debug, Clone, PartialEq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
            pub struct $regular {
                /// Position in the flattened array.
                pub flat_index: i32,
                /// Position along each dimension.
                #[cfg_attr(feature = "serde", serde(rename = "IndicesBytes", with = "packed"))]
                pub indices:    IndexArray,
                /// The value.
                pub value:      Option<$ty>
            }

            impl $regular {
                /// Row holding `value` at the given positions.
                pub fn new(
                    flat_index: i32,
                    indices: impl Into<IndexArray>,
                    value: impl Into<Option<$ty>>
                ) -> Self {
                    Self {
                        flat_index,
                        indices: indices.into(),
                        value: value.into()
                    }
                }

                /// Indices in their packed store form.
                pub fn indices_bytes(&self) -> Vec<u8> {
                    self.indices.encode()
                }

                /// Replace the indices from their packed store form.
                ///
                /// # Errors
                ///
                /// Returns [`IndexCodecError`] when `bytes` is malformed; the
                /// row is left unchanged.
                pub fn set_indices_bytes(&mut self, bytes: &[u8]) -> Result<(), IndexCodecError> {
                    self.indices = IndexArray::decode(bytes)?;
                    Ok(())
                }
            }

            impl DescribeType for $regular {
                fn describe() -> TypeRef {
                    row_description(
                        stringify!($regular),
                        concat!(module_path!(), "::", stringify!($regular)),
                        vec![
                            MemberDescription::new("flat_index", <i32>::describe())
                                .with_column(FLAT_INDEX_COLUMN),
                            MemberDescription::new("indices", <Option<Vec<u8>>>::describe())
                                .with_column(INDICES_COLUMN),
                            MemberDescription::new("value", <Option<$ty>>::describe())
                                .with_column(VALUE_COLUMN),
                        ]
                    )
                }
            }
        )*
    };
}

row_table!(regular_rows);

#[cfg(feature = "serde")]
mod packed {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::IndexArray;

    pub fn serialize<S: Serializer>(indices: &IndexArray, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&indices.encode())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IndexArray, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        IndexArray::decode(&bytes).map_err(D::Error::custom)
    }
}
