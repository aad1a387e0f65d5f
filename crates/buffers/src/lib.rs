//! Binary buffer primitives for shapepack.
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking;
//!   every read is bounds-checked and fails with [`BufferError`] instead of
//!   panicking, so truncated input surfaces as an error the codecs can map
//!
//! All multi-byte quantities are big-endian.
//!
//! # Example
//!
//! ```
//! use shapepack_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u32(0x0203_0405);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.u32(), Ok(0x0203_0405));
//! assert_eq!(reader.utf8(5), Ok("hello"));
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
        }
    }
}

impl std::error::Error for BufferError {}
