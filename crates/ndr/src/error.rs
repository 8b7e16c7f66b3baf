//! NDR decoding error types

use crate::context::FloatRepresentation;
use thiserror::Error;

/// Broad classification of a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ended before a field was complete
    Truncated,
    /// A fixed field failed its constant or enumerated-value check
    Structural,
    /// A length-prefixed field violated its arithmetic invariant
    Bounds,
}

/// Malformed NDR input
///
/// Every variant describes which check rejected the stream. Use
/// [`NdrError::kind`] to tell an incomplete stream from an invalid one.
#[derive(Debug, Error)]
pub enum NdrError {
    /// Not enough bytes left for the field being read
    #[error("not enough bytes for {context}: needed {needed}, have {have}")]
    Truncated {
        context: &'static str,
        needed: usize,
        have: usize,
    },

    /// Common header version byte is not 1
    #[error("stream does not indicate a type serialization of version 1 (got {0})")]
    InvalidVersion(u8),

    /// Endianness nibble is neither 0 nor 1
    #[error("common header does not indicate a valid endianness (code {0})")]
    InvalidByteOrder(u8),

    /// Character encoding nibble is neither 0 nor 1
    #[error("common header does not indicate a valid character encoding (code {0})")]
    InvalidCharacterEncoding(u8),

    /// Declared common header length is not 8
    #[error("common header does not indicate a valid length (got {0})")]
    InvalidHeaderLength(u8),

    /// Private header object length is not 8-byte aligned
    #[error("object buffer length not a multiple of 8 (got {0})")]
    MisalignedObjectLength(u32),

    /// Conformant-varying string counts are inconsistent
    #[error("string bounds exceeded: max_count={max_count}, offset={offset}, actual_count={actual_count}")]
    StringBounds {
        max_count: u32,
        offset: u32,
        actual_count: u32,
    },

    /// A count asks for more elements than the configured limit
    #[error("allocation limit exceeded: requested {requested} elements, limit {limit}")]
    AllocationLimitExceeded { requested: usize, limit: usize },

    /// Private header declares more payload than the buffer holds
    #[error("object buffer length {declared} exceeds the {available} bytes available")]
    ObjectLengthExceedsBuffer { declared: u32, available: usize },

    /// Floating point read requested on a stream that is not IEEE
    #[error("unsupported floating point representation: {0:?}")]
    UnsupportedFloatRepresentation(FloatRepresentation),

    /// Code units are not valid UTF-16
    #[error("UTF-16 error: {0}")]
    InvalidUtf16(#[from] std::char::DecodeUtf16Error),
}

impl NdrError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NdrError::Truncated { .. } | NdrError::ObjectLengthExceedsBuffer { .. } => {
                ErrorKind::Truncated
            }
            NdrError::InvalidVersion(_)
            | NdrError::InvalidByteOrder(_)
            | NdrError::InvalidCharacterEncoding(_)
            | NdrError::InvalidHeaderLength(_)
            | NdrError::UnsupportedFloatRepresentation(_)
            | NdrError::InvalidUtf16(_) => ErrorKind::Structural,
            NdrError::MisalignedObjectLength(_)
            | NdrError::StringBounds { .. }
            | NdrError::AllocationLimitExceeded { .. } => ErrorKind::Bounds,
        }
    }

    pub(crate) fn truncated(context: &'static str, needed: usize, have: usize) -> Self {
        NdrError::Truncated {
            context,
            needed,
            have,
        }
    }
}

/// Result type for NDR operations
pub type Result<T> = std::result::Result<T, NdrError>;
