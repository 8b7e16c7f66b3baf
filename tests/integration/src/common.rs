//! Shared fixture builders for the integration tests
//!
//! The crate under test only decodes, so test buffers are assembled here by
//! hand with `BytesMut`.

#![allow(dead_code)]

use bytes::{BufMut, BytesMut};
use ndr::ByteOrder;

/// Common header for the given byte order: ASCII, IEEE, filler 0xcc
pub fn common_header(order: ByteOrder) -> [u8; 8] {
    [0x01, order.code() << 4, 0x00, 0x08, 0xCC, 0xCC, 0xCC, 0xCC]
}

/// Raw common header with every field chosen by the caller
pub fn raw_common_header(version: u8, representation: u8, float: u8, length: u8) -> [u8; 8] {
    [version, representation, float, length, 0xCC, 0xCC, 0xCC, 0xCC]
}

/// Writes NDR values in a fixed byte order
pub struct PayloadBuilder {
    order: ByteOrder,
    buf: BytesMut,
}

impl PayloadBuilder {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            buf: BytesMut::new(),
        }
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.buf.put_u8(v);
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        match self.order {
            ByteOrder::Little => self.buf.put_u16_le(v),
            ByteOrder::Big => self.buf.put_u16(v),
        }
        self
    }

    pub fn u32(mut self, v: u32) -> Self {
        match self.order {
            ByteOrder::Little => self.buf.put_u32_le(v),
            ByteOrder::Big => self.buf.put_u32(v),
        }
        self
    }

    pub fn u64(mut self, v: u64) -> Self {
        match self.order {
            ByteOrder::Little => self.buf.put_u64_le(v),
            ByteOrder::Big => self.buf.put_u64(v),
        }
        self
    }

    pub fn f32(mut self, v: f32) -> Self {
        match self.order {
            ByteOrder::Little => self.buf.put_f32_le(v),
            ByteOrder::Big => self.buf.put_f32(v),
        }
        self
    }

    pub fn f64(mut self, v: f64) -> Self {
        match self.order {
            ByteOrder::Little => self.buf.put_f64_le(v),
            ByteOrder::Big => self.buf.put_f64(v),
        }
        self
    }

    pub fn bytes(mut self, v: &[u8]) -> Self {
        self.buf.put_slice(v);
        self
    }

    /// Conformant varying string header followed by `units`
    pub fn cv_string(self, max: u32, offset: u32, actual: u32, units: &[u16]) -> Self {
        let mut this = self.u32(max).u32(offset).u32(actual);
        for unit in units {
            this = this.u16(*unit);
        }
        this
    }

    /// Zero padding up to a multiple of 8
    pub fn pad8(mut self) -> Self {
        while self.buf.len() % 8 != 0 {
            self.buf.put_u8(0);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    /// Prefix with both headers. The declared object length is the payload
    /// length.
    pub fn into_stream(self) -> Vec<u8> {
        let order = self.order;
        let payload = self.finish();
        let mut stream = BytesMut::with_capacity(16 + payload.len());
        stream.put_slice(&common_header(order));
        match order {
            ByteOrder::Little => stream.put_u32_le(payload.len() as u32),
            ByteOrder::Big => stream.put_u32(payload.len() as u32),
        }
        stream.put_u32(0);
        stream.put_slice(&payload);
        stream.to_vec()
    }
}

/// UTF-16 code units of `s`
pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
