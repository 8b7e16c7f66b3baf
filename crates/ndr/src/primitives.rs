//! NDR primitive readers
//!
//! | NDR Type       | Rust Type | Size |
//! |----------------|-----------|------|
//! | boolean        | bool      | 1    |
//! | byte/char      | u8        | 1    |
//! | small          | i8        | 1    |
//! | short          | i16       | 2    |
//! | long           | i32       | 4    |
//! | hyper          | i64       | 8    |
//! | unsigned short | u16       | 2    |
//! | unsigned long  | u32       | 4    |
//! | unsigned hyper | u64       | 8    |
//! | float          | f32       | 4    |
//! | double         | f64       | 8    |
//!
//! Each reader consumes exactly its own width from the cursor. Reads are not
//! aligned implicitly; call [`align`] where the layout asks for padding.

use crate::{ByteOrder, NdrContext, NdrCursor, Result};
use bytes::Bytes;

/// Types that decode from a fixed number of NDR bytes
pub trait NdrDecode: Sized {
    /// Bytes consumed by one value
    const WIDTH: usize;

    /// Decode one value at the cursor. Single-byte types ignore `order`.
    fn ndr_decode(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<Self>;
}

macro_rules! impl_ndr_primitive {
    ($ty:ty, $size:expr, $get:ident, $what:literal) => {
        impl NdrDecode for $ty {
            const WIDTH: usize = $size;

            #[inline]
            fn ndr_decode(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<Self> {
                let mut bytes = cursor.take($size, $what)?;
                Ok(order.$get(&mut bytes))
            }
        }
    };
}

impl NdrDecode for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn ndr_decode(cursor: &mut NdrCursor<'_>, _order: ByteOrder) -> Result<Self> {
        Ok(cursor.take(1, "u8")?[0])
    }
}

impl NdrDecode for i8 {
    const WIDTH: usize = 1;

    #[inline]
    fn ndr_decode(cursor: &mut NdrCursor<'_>, _order: ByteOrder) -> Result<Self> {
        Ok(cursor.take(1, "i8")?[0] as i8)
    }
}

/// NDR boolean: one byte, any non-zero value is true
impl NdrDecode for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn ndr_decode(cursor: &mut NdrCursor<'_>, _order: ByteOrder) -> Result<Self> {
        Ok(cursor.take(1, "boolean")?[0] != 0)
    }
}

impl_ndr_primitive!(u16, 2, get_u16, "u16");
impl_ndr_primitive!(i16, 2, get_i16, "i16");
impl_ndr_primitive!(u32, 4, get_u32, "u32");
impl_ndr_primitive!(i32, 4, get_i32, "i32");
impl_ndr_primitive!(u64, 8, get_u64, "u64");
impl_ndr_primitive!(i64, 8, get_i64, "i64");
impl_ndr_primitive!(f32, 4, get_f32, "f32");
impl_ndr_primitive!(f64, 8, get_f64, "f64");

#[inline]
pub fn read_u8(cursor: &mut NdrCursor<'_>) -> Result<u8> {
    u8::ndr_decode(cursor, ByteOrder::Little)
}

#[inline]
pub fn read_i8(cursor: &mut NdrCursor<'_>) -> Result<i8> {
    i8::ndr_decode(cursor, ByteOrder::Little)
}

#[inline]
pub fn read_bool(cursor: &mut NdrCursor<'_>) -> Result<bool> {
    bool::ndr_decode(cursor, ByteOrder::Little)
}

#[inline]
pub fn read_u16(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<u16> {
    u16::ndr_decode(cursor, order)
}

#[inline]
pub fn read_i16(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<i16> {
    i16::ndr_decode(cursor, order)
}

#[inline]
pub fn read_u32(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<u32> {
    u32::ndr_decode(cursor, order)
}

#[inline]
pub fn read_i32(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<i32> {
    i32::ndr_decode(cursor, order)
}

#[inline]
pub fn read_u64(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<u64> {
    u64::ndr_decode(cursor, order)
}

#[inline]
pub fn read_i64(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<i64> {
    i64::ndr_decode(cursor, order)
}

/// IEEE-754 single precision from a 4-byte read
#[inline]
pub fn read_f32(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<f32> {
    f32::ndr_decode(cursor, order)
}

/// IEEE-754 double precision from an 8-byte read
#[inline]
pub fn read_f64(cursor: &mut NdrCursor<'_>, order: ByteOrder) -> Result<f64> {
    f64::ndr_decode(cursor, order)
}

/// Copy `len` raw bytes out of the buffer.
///
/// Byte spans are not reordered, so no byte order is involved.
pub fn read_bytes(cursor: &mut NdrCursor<'_>, len: usize) -> Result<Bytes> {
    Ok(Bytes::copy_from_slice(cursor.take(len, "byte span")?))
}

/// Skip padding so the cursor position is a multiple of `alignment`.
///
/// Returns the number of padding bytes skipped.
pub fn align(cursor: &mut NdrCursor<'_>, alignment: usize) -> Result<usize> {
    let padding = NdrContext::align_padding(cursor.position(), alignment);
    cursor.skip(padding, "alignment padding")?;
    Ok(padding)
}
