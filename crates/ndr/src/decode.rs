//! Decode sessions
//!
//! A [`Decoder`] runs the usual sequence for one serialized object: parse the
//! common header, parse the private header in the byte order the common
//! header declares, then read the payload. Every read goes through the
//! session's own cursor and byte order.

use crate::header::{parse_common_header, parse_private_header};
use crate::primitives::{self, NdrDecode};
use crate::strings::{read_conformant_varying_string_with_limit, DecodedString};
use crate::{
    ByteOrder, CommonHeader, NdrContext, NdrCursor, NdrError, PrivateHeader, Result,
    COMMON_HEADER_BYTES, PRIVATE_HEADER_BYTES,
};
use bytes::Bytes;
use tracing::debug;

/// Default cap on elements accepted by a single string read
pub const DEFAULT_MAX_STRING_ELEMENTS: usize = 1 << 20;

/// Decode session configuration
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Largest `actual_count` accepted for one string
    pub max_string_elements: usize,
    /// Require the declared object length to fit the buffer, and stop the
    /// payload at that length
    pub enforce_object_length: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_string_elements: DEFAULT_MAX_STRING_ELEMENTS,
            enforce_object_length: true,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_string_elements(mut self, max: usize) -> Self {
        self.max_string_elements = max;
        self
    }

    pub fn with_enforce_object_length(mut self, enforce: bool) -> Self {
        self.enforce_object_length = enforce;
        self
    }
}

/// Decoder for one type-serialized buffer
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    common: CommonHeader,
    private: PrivateHeader,
    payload: NdrCursor<'a>,
    config: DecoderConfig,
}

impl<'a> Decoder<'a> {
    /// Open a session with the default configuration.
    pub fn open(buf: &'a [u8]) -> Result<Self> {
        Self::with_config(buf, DecoderConfig::default())
    }

    /// Parse both headers and position the cursor at the object buffer.
    pub fn with_config(buf: &'a [u8], config: DecoderConfig) -> Result<Self> {
        let (common, rest) = parse_common_header(buf)?;
        let (private, rest) = parse_private_header(rest, common.byte_order)?;

        let payload = if config.enforce_object_length {
            let declared = private.object_buffer_length;
            let len = declared as usize;
            if len > rest.len() {
                debug!(declared, available = rest.len(), "object buffer overruns input");
                return Err(NdrError::ObjectLengthExceedsBuffer {
                    declared,
                    available: rest.len(),
                });
            }
            &rest[..len]
        } else {
            rest
        };

        debug!(
            byte_order = ?common.byte_order,
            object_buffer_length = private.object_buffer_length,
            payload_len = payload.len(),
            "opened NDR decode session"
        );

        Ok(Self {
            common,
            private,
            payload: NdrCursor::new(payload),
            config,
        })
    }

    pub fn common_header(&self) -> &CommonHeader {
        &self.common
    }

    pub fn private_header(&self) -> &PrivateHeader {
        &self.private
    }

    pub fn context(&self) -> NdrContext {
        self.common.context()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.common.byte_order
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Offset into the payload (headers excluded)
    pub fn position(&self) -> usize {
        self.payload.position()
    }

    /// Offset into the original buffer (headers included)
    pub fn stream_position(&self) -> usize {
        COMMON_HEADER_BYTES + PRIVATE_HEADER_BYTES + self.payload.position()
    }

    pub fn remaining(&self) -> usize {
        self.payload.remaining()
    }

    /// Unread payload bytes
    pub fn rest(&self) -> &'a [u8] {
        self.payload.rest()
    }

    /// Decode any fixed-width primitive in the session's byte order.
    pub fn read<T: NdrDecode>(&mut self) -> Result<T> {
        T::ndr_decode(&mut self.payload, self.common.byte_order)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        primitives::read_u8(&mut self.payload)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        primitives::read_i8(&mut self.payload)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        primitives::read_bool(&mut self.payload)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        primitives::read_u16(&mut self.payload, self.common.byte_order)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        primitives::read_i16(&mut self.payload, self.common.byte_order)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        primitives::read_u32(&mut self.payload, self.common.byte_order)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        primitives::read_i32(&mut self.payload, self.common.byte_order)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        primitives::read_u64(&mut self.payload, self.common.byte_order)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        primitives::read_i64(&mut self.payload, self.common.byte_order)
    }

    /// Read an IEEE single. Fails if the stream is not IEEE.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.require_ieee()?;
        primitives::read_f32(&mut self.payload, self.common.byte_order)
    }

    /// Read an IEEE double. Fails if the stream is not IEEE.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.require_ieee()?;
        primitives::read_f64(&mut self.payload, self.common.byte_order)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        primitives::read_bytes(&mut self.payload, len)
    }

    /// Skip padding up to the next multiple of `alignment`, measured from the
    /// start of the payload.
    pub fn align(&mut self, alignment: usize) -> Result<usize> {
        primitives::align(&mut self.payload, alignment)
    }

    /// Read a conformant varying string, bounded by
    /// [`DecoderConfig::max_string_elements`].
    pub fn read_conformant_varying_string(&mut self) -> Result<DecodedString> {
        read_conformant_varying_string_with_limit(
            &mut self.payload,
            self.common.byte_order,
            self.config.max_string_elements,
        )
    }

    fn require_ieee(&self) -> Result<()> {
        let rep = self.common.float_representation;
        if !rep.is_ieee() {
            return Err(NdrError::UnsupportedFloatRepresentation(rep));
        }
        Ok(())
    }
}
