//! Error types for .splice decoding and encoding

use crate::cursor::ShortRead;

/// Errors that can occur when decoding or encoding a .splice pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    /// The first six bytes are not "SPLICE"
    #[error("invalid magic bytes (expected 'SPLICE')")]
    BadMagic,

    /// The input ended before a field could be read in full.
    ///
    /// `offset` is the absolute position of the failed read, `needed` the
    /// number of bytes requested and `available` what was left before the
    /// active limit (the body limit inside the body).
    #[error("truncated body at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedBody {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A step byte is neither 0x00 nor 0x01
    #[error("invalid step byte 0x{value:02X} in track {track} at step {step}")]
    InvalidStep { track: usize, step: usize, value: u8 },

    /// A field does not fit its wire representation.
    ///
    /// On encode: a version over 32 bytes, a name over 255 bytes, or a body
    /// too large for the length field. On decode: a track name length over
    /// 255 that the body could otherwise hold (a length running past the
    /// body is [`SpliceError::TruncatedBody`]).
    #[error("{field} is {len} bytes long (max {max})")]
    OversizedField {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl From<ShortRead> for SpliceError {
    fn from(err: ShortRead) -> Self {
        Self::TruncatedBody {
            offset: err.offset,
            needed: err.requested,
            available: err.available,
        }
    }
}

impl SpliceError {
    /// Shorthand for an [`SpliceError::OversizedField`]
    pub(crate) fn oversized(field: &'static str, len: usize, max: usize) -> Self {
        Self::OversizedField { field, len, max }
    }
}
