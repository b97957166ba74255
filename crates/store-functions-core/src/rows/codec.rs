// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Packed multi-dimensional indices.
//!
//! # Format
//!
//! ```text
//! count      LEB128 varint
//! presence   ceil(count / 8) bytes, bit i % 8 of byte i / 8 set when entry i is present
//! entries    one zig-zag LEB128 varint per present entry
//! ```

use std::ops::Deref;

use thiserror::Error;

/// Longest LEB128 encoding of a 32-bit value.
const MAX_VARINT_LEN: usize = 5;

/// Error decoding packed indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexCodecError {
    /// Input ended inside the structure.
    #[error("packed indices truncated at byte {offset}")]
    Truncated {
        /// Offset where more input was expected.
        offset: usize
    },

    /// A varint does not fit in 32 bits.
    #[error("varint at byte {offset} overflows 32 bits")]
    VarintOverflow {
        /// Offset of the varint.
        offset: usize
    },

    /// Input continues after the last entry.
    #[error("{count} trailing bytes after packed indices")]
    TrailingBytes {
        /// Number of extra bytes.
        count: usize
    }
}

/// Indices of a value within a multi-dimensional array.
///
/// `None` marks a dimension without a position.
///
/// # Example
///
/// ```rust
/// use store_functions_core::rows::IndexArray;
///
/// let indices = IndexArray::from(vec![Some(2), None, Some(-1)]);
/// let bytes = indices.encode();
/// assert_eq!(IndexArray::decode(&bytes).unwrap(), indices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndexArray(Vec<Option<i32>>);

impl IndexArray {
    /// Empty index array.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Take the entries.
    pub fn into_inner(self) -> Vec<Option<i32>> {
        self.0
    }

    /// Packed store form.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MAX_VARINT_LEN + self.0.len().div_ceil(8) + self.0.len());
        write_varint(&mut out, self.0.len() as u32);

        let bitmap_start = out.len();
        out.resize(bitmap_start + self.0.len().div_ceil(8), 0);
        for (i, entry) in self.0.iter().enumerate() {
            if entry.is_some() {
                out[bitmap_start + i / 8] |= 1 << (i % 8);
            }
        }

        for value in self.0.iter().flatten() {
            write_varint(&mut out, zigzag(*value));
        }
        out
    }

    /// Decode the packed store form.
    ///
    /// # Errors
    ///
    /// Returns [`IndexCodecError`] for truncated input, oversized varints
    /// and trailing bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, IndexCodecError> {
        let mut reader = Reader {
            bytes,
            offset: 0
        };

        let count = reader.varint()? as usize;
        let bitmap = reader.take(count.div_ceil(8))?;

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let present = bitmap[i / 8] & (1 << (i % 8)) != 0;
            entries.push(if present {
                Some(unzigzag(reader.varint()?))
            } else {
                None
            });
        }

        match bytes.len() - reader.offset {
            0 => Ok(Self(entries)),
            count => Err(IndexCodecError::TrailingBytes {
                count
            })
        }
    }
}

impl Deref for IndexArray {
    type Target = [Option<i32>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Option<i32>>> for IndexArray {
    fn from(entries: Vec<Option<i32>>) -> Self {
        Self(entries)
    }
}

impl From<Vec<i32>> for IndexArray {
    fn from(entries: Vec<i32>) -> Self {
        entries.into_iter().map(Some).collect()
    }
}

impl FromIterator<Option<i32>> for IndexArray {
    fn from_iter<I: IntoIterator<Item = Option<i32>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

struct Reader<'a> {
    bytes:  &'a [u8],
    offset: usize
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], IndexCodecError> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(IndexCodecError::Truncated {
                offset: self.bytes.len()
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn varint(&mut self) -> Result<u32, IndexCodecError> {
        let start = self.offset;
        let mut value: u32 = 0;
        for i in 0..MAX_VARINT_LEN {
            let byte = *self
                .bytes
                .get(self.offset)
                .ok_or(IndexCodecError::Truncated {
                    offset: self.offset
                })?;
            self.offset += 1;

            let payload = u32::from(byte & 0x7f);
            if i == MAX_VARINT_LEN - 1 && (byte & 0x80 != 0 || payload > 0x0f) {
                return Err(IndexCodecError::VarintOverflow {
                    offset: start
                });
            }
            value |= payload << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(IndexCodecError::VarintOverflow {
            offset: start
        })
    }
}

fn write_varint(out: &mut Vec<u8>, mut value: u32) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

const fn zigzag(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

const fn unzigzag(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}
