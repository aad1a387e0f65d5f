//! Flat numeric list codec: a length-prefixed array, no nesting.

use shapepack_buffers::{Reader, Writer};

use crate::error::{DecodeError, EncodeError};
use crate::num::WireNumber;

/// Encoder for flat numeric lists.
///
/// An empty sequence encodes as count zero, not as an absent field, so it
/// round-trips to an empty sequence.
pub struct FlatListEncoder {
    pub writer: Writer,
}

impl Default for FlatListEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatListEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn encode<T: WireNumber>(&mut self, values: &[T]) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        let count = u32::try_from(values.len()).map_err(|_| EncodeError::LengthOverflow)?;
        self.writer.u32(count);
        for value in values {
            value.write(&mut self.writer);
        }
        Ok(self.writer.flush())
    }
}

/// Decoder for flat numeric lists.
#[derive(Default)]
pub struct FlatListDecoder;

impl FlatListDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode<T: WireNumber>(&mut self, bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
        let mut reader = Reader::new(bytes);
        let count = reader.u32()? as usize;
        let mut values = Vec::with_capacity(count.min(reader.size()));
        for _ in 0..count {
            values.push(T::read(&mut reader)?);
        }
        Ok(values)
    }
}
