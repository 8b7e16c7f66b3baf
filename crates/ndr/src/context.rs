//! NDR data representation context
//!
//! The common header labels a stream with an integer byte order, a character
//! encoding and a floating point format. These labels are plain `Copy`
//! values and are passed explicitly to every read; nothing here is global.

use bytes::Buf;

/// Integer byte order of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Endianness code 0
    Big,
    /// Endianness code 1
    Little,
}

impl ByteOrder {
    /// Map a 4-bit endianness code. Only 0 and 1 are defined.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Big),
            1 => Some(Self::Little),
            _ => None,
        }
    }

    /// The wire code for this byte order
    pub fn code(self) -> u8 {
        match self {
            Self::Big => 0,
            Self::Little => 1,
        }
    }

    /// Get a u16
    #[inline]
    pub fn get_u16<B: Buf>(self, buf: &mut B) -> u16 {
        match self {
            Self::Little => buf.get_u16_le(),
            Self::Big => buf.get_u16(),
        }
    }

    /// Get an i16
    #[inline]
    pub fn get_i16<B: Buf>(self, buf: &mut B) -> i16 {
        match self {
            Self::Little => buf.get_i16_le(),
            Self::Big => buf.get_i16(),
        }
    }

    /// Get a u32
    #[inline]
    pub fn get_u32<B: Buf>(self, buf: &mut B) -> u32 {
        match self {
            Self::Little => buf.get_u32_le(),
            Self::Big => buf.get_u32(),
        }
    }

    /// Get an i32
    #[inline]
    pub fn get_i32<B: Buf>(self, buf: &mut B) -> i32 {
        match self {
            Self::Little => buf.get_i32_le(),
            Self::Big => buf.get_i32(),
        }
    }

    /// Get a u64
    #[inline]
    pub fn get_u64<B: Buf>(self, buf: &mut B) -> u64 {
        match self {
            Self::Little => buf.get_u64_le(),
            Self::Big => buf.get_u64(),
        }
    }

    /// Get an i64
    #[inline]
    pub fn get_i64<B: Buf>(self, buf: &mut B) -> i64 {
        match self {
            Self::Little => buf.get_i64_le(),
            Self::Big => buf.get_i64(),
        }
    }

    /// Get an IEEE f32
    #[inline]
    pub fn get_f32<B: Buf>(self, buf: &mut B) -> f32 {
        match self {
            Self::Little => buf.get_f32_le(),
            Self::Big => buf.get_f32(),
        }
    }

    /// Get an IEEE f64
    #[inline]
    pub fn get_f64<B: Buf>(self, buf: &mut B) -> f64 {
        match self {
            Self::Little => buf.get_f64_le(),
            Self::Big => buf.get_f64(),
        }
    }
}

/// Character representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterEncoding {
    Ascii,
    Ebcdic,
}

impl CharacterEncoding {
    /// Map a 4-bit character encoding code. Only 0 and 1 are defined.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Ascii),
            1 => Some(Self::Ebcdic),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Ascii => 0,
            Self::Ebcdic => 1,
        }
    }
}

/// Floating point representation
///
/// Only IEEE is decoded. The other formats are recognized so that a reader
/// can report them; codes above 3 are kept as `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatRepresentation {
    Ieee,
    Vax,
    Cray,
    Ibm,
    Unrecognized(u8),
}

impl FloatRepresentation {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Ieee,
            1 => Self::Vax,
            2 => Self::Cray,
            3 => Self::Ibm,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Ieee => 0,
            Self::Vax => 1,
            Self::Cray => 2,
            Self::Ibm => 3,
            Self::Unrecognized(code) => code,
        }
    }

    /// Whether float reads can be decoded for this representation
    pub fn is_ieee(self) -> bool {
        self == Self::Ieee
    }
}

/// Data representation labels of one stream
///
/// Built from a [`CommonHeader`](crate::CommonHeader) and threaded into the
/// reads of a single decode session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdrContext {
    pub byte_order: ByteOrder,
    pub character_encoding: CharacterEncoding,
    pub float_representation: FloatRepresentation,
}

impl NdrContext {
    /// Calculate padding needed to align to the given boundary
    #[inline]
    pub fn align_padding(position: usize, alignment: usize) -> usize {
        if alignment == 0 || alignment == 1 {
            return 0;
        }
        let remainder = position % alignment;
        if remainder == 0 {
            0
        } else {
            alignment - remainder
        }
    }
}
