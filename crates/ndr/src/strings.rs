//! Conformant varying strings
//!
//! Wire format, integers in the stream's byte order:
//! ```text
//! max_count: u32     # Maximum elements, terminator included
//! offset: u32        # Index of the first element transmitted
//! actual_count: u32  # Elements transmitted, terminator included
//! skipped[offset]    # 2 bytes each, present but not decoded
//! chars[actual_count]
//! ```
//!
//! Elements are 16-bit code units. The decoder returns them exactly as
//! transmitted: a trailing null terminator stays in the result and it is up to
//! the caller to drop it with [`DecodedString::trim_terminator`].

use crate::primitives::{read_u16, read_u32};
use crate::{ByteOrder, NdrCursor, NdrError, Result};
use tracing::trace;

/// Size of one string element on the wire
const ELEMENT_BYTES: usize = 2;

/// Code units of a decoded conformant varying string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedString(Vec<u16>);

impl DecodedString {
    pub fn new(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// All transmitted code units, terminator included
    pub fn code_units(&self) -> &[u16] {
        &self.0
    }

    pub fn into_code_units(self) -> Vec<u16> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the last code unit is a null terminator
    pub fn has_terminator(&self) -> bool {
        self.0.last() == Some(&0)
    }

    /// Code units without a single trailing null terminator
    pub fn trim_terminator(&self) -> &[u16] {
        match self.0.split_last() {
            Some((&0, head)) => head,
            _ => &self.0,
        }
    }

    /// Convert all code units, terminator included, to a `String`.
    pub fn to_utf16_string(&self) -> Result<String> {
        char::decode_utf16(self.0.iter().copied())
            .collect::<std::result::Result<String, _>>()
            .map_err(NdrError::from)
    }

    /// Like [`to_utf16_string`](Self::to_utf16_string), replacing invalid
    /// code units with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<Vec<u16>> for DecodedString {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl AsRef<[u16]> for DecodedString {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

/// Read a conformant varying string of 16-bit elements.
pub fn read_conformant_varying_string(
    cursor: &mut NdrCursor<'_>,
    order: ByteOrder,
) -> Result<DecodedString> {
    read_conformant_varying_string_with_limit(cursor, order, usize::MAX)
}

/// Byte length of `count` elements; counts whose byte length overflows
/// `usize` are refused as an allocation limit.
fn element_bytes(count: usize) -> Result<usize> {
    count
        .checked_mul(ELEMENT_BYTES)
        .ok_or(NdrError::AllocationLimitExceeded {
            requested: count,
            limit: usize::MAX / ELEMENT_BYTES,
        })
}

/// Read a conformant varying string, refusing more than `max_elements`
/// transmitted elements.
pub fn read_conformant_varying_string_with_limit(
    cursor: &mut NdrCursor<'_>,
    order: ByteOrder,
    max_elements: usize,
) -> Result<DecodedString> {
    let max_count = read_u32(cursor, order)?;
    let offset = read_u32(cursor, order)?;
    let actual_count = read_u32(cursor, order)?;
    trace!(max_count, offset, actual_count, "conformant varying string");

    if offset > max_count || actual_count > max_count - offset {
        return Err(NdrError::StringBounds {
            max_count,
            offset,
            actual_count,
        });
    }

    let actual = actual_count as usize;
    if actual > max_elements {
        return Err(NdrError::AllocationLimitExceeded {
            requested: actual,
            limit: max_elements,
        });
    }

    if offset > 0 {
        cursor.skip(element_bytes(offset as usize)?, "string offset")?;
    }

    cursor.require(element_bytes(actual)?, "string elements")?;

    let mut units = Vec::with_capacity(actual);
    for _ in 0..actual {
        units.push(read_u16(cursor, order)?);
    }
    Ok(DecodedString(units))
}
