//! Type serialization headers
//!
//! A version 1 type serialization stream starts with two fixed headers:
//!
//! ```text
//! Common header (8 bytes)
//! +---------+------------+---------+---------+-----------------------+
//! | version | endian|char|  float  | hdr_len |        filler         |
//! |  == 1   |  hi  | lo  |  rep    |  == 8   |      0xcccccccc       |
//! +---------+------------+---------+---------+-----------------------+
//!
//! Private header (8 bytes, integers in the common header's byte order)
//! +-----------------------------------+-----------------------------+
//! |   object buffer length (u32)      |           filler            |
//! |   multiple of 8, excludes header  |                             |
//! +-----------------------------------+-----------------------------+
//! ```
//!
//! Filler bytes are captured but never validated.

use crate::primitives::{read_u32, read_u8};
use crate::{
    ByteOrder, CharacterEncoding, FloatRepresentation, NdrContext, NdrCursor, NdrError, Result,
};
use tracing::{debug, trace};

/// Type serialization protocol version
pub const PROTOCOL_VERSION: u8 = 1;
/// Size of the common header
pub const COMMON_HEADER_BYTES: usize = 8;
/// Size of the private header
pub const PRIVATE_HEADER_BYTES: usize = 8;

/// The 8-byte common header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonHeader {
    pub version: u8,
    pub byte_order: ByteOrder,
    pub character_encoding: CharacterEncoding,
    pub float_representation: FloatRepresentation,
    pub header_length: u8,
    pub filler: [u8; 4],
}

impl CommonHeader {
    /// Representation labels for the rest of the stream
    pub fn context(&self) -> NdrContext {
        NdrContext {
            byte_order: self.byte_order,
            character_encoding: self.character_encoding,
            float_representation: self.float_representation,
        }
    }
}

/// The 8-byte private header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateHeader {
    /// Length of the serialized object, padding included, header excluded
    pub object_buffer_length: u32,
    pub filler: [u8; 4],
}

fn filler(cursor: &mut NdrCursor<'_>) -> Result<[u8; 4]> {
    let bytes = cursor.take(4, "header filler")?;
    Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Parse the common header from the start of `buf`.
///
/// Returns the header and the bytes following it.
pub fn parse_common_header(buf: &[u8]) -> Result<(CommonHeader, &[u8])> {
    let mut cursor = NdrCursor::new(buf);
    cursor.require(COMMON_HEADER_BYTES, "common header")?;

    let version = read_u8(&mut cursor)?;
    if version != PROTOCOL_VERSION {
        debug!(version, "rejecting common header: bad version");
        return Err(NdrError::InvalidVersion(version));
    }

    let representation = read_u8(&mut cursor)?;
    let endian_code = (representation >> 4) & 0x0F;
    let byte_order = ByteOrder::from_code(endian_code).ok_or_else(|| {
        debug!(endian_code, "rejecting common header: bad endianness");
        NdrError::InvalidByteOrder(endian_code)
    })?;
    let char_code = representation & 0x0F;
    let character_encoding = CharacterEncoding::from_code(char_code).ok_or_else(|| {
        debug!(char_code, "rejecting common header: bad character encoding");
        NdrError::InvalidCharacterEncoding(char_code)
    })?;

    let float_representation = FloatRepresentation::from_code(read_u8(&mut cursor)?);

    let header_length = read_u8(&mut cursor)?;
    if header_length as usize != COMMON_HEADER_BYTES {
        debug!(header_length, "rejecting common header: bad length");
        return Err(NdrError::InvalidHeaderLength(header_length));
    }

    let filler = filler(&mut cursor)?;
    debug_assert_eq!(cursor.position(), COMMON_HEADER_BYTES);

    let header = CommonHeader {
        version,
        byte_order,
        character_encoding,
        float_representation,
        header_length,
        filler,
    };
    trace!(?header, "parsed common header");
    Ok((header, cursor.rest()))
}

/// Parse the private header from the start of `buf`.
///
/// `byte_order` comes from the common header. Returns the header and the
/// bytes following it.
pub fn parse_private_header(buf: &[u8], byte_order: ByteOrder) -> Result<(PrivateHeader, &[u8])> {
    let mut cursor = NdrCursor::new(buf);
    cursor.require(PRIVATE_HEADER_BYTES, "private header")?;

    let object_buffer_length = read_u32(&mut cursor, byte_order)?;
    if object_buffer_length % 8 != 0 {
        debug!(object_buffer_length, "rejecting private header: misaligned length");
        return Err(NdrError::MisalignedObjectLength(object_buffer_length));
    }

    let filler = filler(&mut cursor)?;
    debug_assert_eq!(cursor.position(), PRIVATE_HEADER_BYTES);

    let header = PrivateHeader {
        object_buffer_length,
        filler,
    };
    trace!(?header, "parsed private header");
    Ok((header, cursor.rest()))
}
