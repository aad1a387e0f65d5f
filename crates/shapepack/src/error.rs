//! Encode/decode error taxonomy shared by all shapepack codecs.

use shapepack_buffers::BufferError;
use thiserror::Error;

/// Error raised while encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The input holds something no scalar or composite kind can represent.
    #[error("unsupported value kind: {0}")]
    UnsupportedValueKind(&'static str),
    /// A string, list, map, or leaf exceeds the u32 length prefix.
    #[error("length exceeds the wire format limit")]
    LengthOverflow,
}

/// Error raised while decoding.
///
/// A failing decode discards any partially built structure; the caller
/// only ever sees the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The wire data contains a tag byte outside the known set.
    #[error("unknown tag byte 0x{0:02x}")]
    UnknownTag(u8),
    /// A chain node marker is neither inner nor leaf.
    #[error("malformed chain node: marker byte 0x{0:02x} is neither inner nor leaf")]
    MalformedChainNode(u8),
    /// The byte sequence ends before a required field is fully read.
    #[error("input ends before the structure is complete")]
    TruncatedInput,
    /// A text field holds bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in text field")]
    InvalidUtf8,
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DecodeError::TruncatedInput,
            BufferError::InvalidUtf8 => DecodeError::InvalidUtf8,
        }
    }
}
