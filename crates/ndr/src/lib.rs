//! NDR (Network Data Representation) type serialization decoder
//!
//! This crate decodes buffers produced by MS-RPCE Type Serialization
//! Version 1: an 8-byte common header, an 8-byte private header, then the
//! NDR-encoded object.
//!
//! # Usage
//!
//! ```
//! use ndr::{ByteOrder, Decoder};
//!
//! let buf = [
//!     0x01, 0x10, 0x00, 0x08, 0xcc, 0xcc, 0xcc, 0xcc, // common header
//!     0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // private header
//!     0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // object buffer
//! ];
//! let mut decoder = Decoder::open(&buf).unwrap();
//! assert_eq!(decoder.byte_order(), ByteOrder::Little);
//! assert_eq!(decoder.read_u32().unwrap(), 42);
//! ```
//!
//! The lower-level pieces can also be driven directly: parse the headers
//! with [`parse_common_header`] and [`parse_private_header`], then read the
//! payload with the functions in [`primitives`] and
//! [`read_conformant_varying_string`], passing the byte order each time.
//!
//! Decoding only. Composite types (structures, arrays, unions, pointers) are
//! left to the caller, built from these primitives.

mod context;
mod cursor;
mod decode;
mod error;
mod header;
pub mod primitives;
mod strings;

pub use context::{ByteOrder, CharacterEncoding, FloatRepresentation, NdrContext};
pub use cursor::NdrCursor;
pub use decode::{Decoder, DecoderConfig, DEFAULT_MAX_STRING_ELEMENTS};
pub use error::{ErrorKind, NdrError, Result};
pub use header::{
    parse_common_header, parse_private_header, CommonHeader, PrivateHeader, COMMON_HEADER_BYTES,
    PRIVATE_HEADER_BYTES, PROTOCOL_VERSION,
};
pub use primitives::NdrDecode;
pub use strings::{
    read_conformant_varying_string, read_conformant_varying_string_with_limit, DecodedString,
};

/// Re-export bytes for convenience
pub use bytes::Bytes;
