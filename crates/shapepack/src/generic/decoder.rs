//! Decoder for the self-describing value format.

use shapepack_buffers::Reader;

use super::constants::*;
use crate::error::DecodeError;
use crate::value::Value;

/// Decoder for the self-describing value format.
///
/// Reads exactly one value from the front of the input; trailing bytes are
/// left unexamined. Decoding recurses with the encoded nesting depth, so
/// like the encoder it is call-stack bounded.
///
/// A failed decode returns the error alone; no partially built value
/// escapes.
#[derive(Default)]
pub struct ValueDecoder;

impl ValueDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one value from `bytes`.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, DecodeError> {
        let mut reader = Reader::new(bytes);
        self.read_any(&mut reader)
    }

    /// Decodes one value and converts it to `serde_json::Value`.
    pub fn decode_json(&mut self, bytes: &[u8]) -> Result<serde_json::Value, DecodeError> {
        Ok(crate::convert::value_to_json(&self.decode(bytes)?))
    }

    pub fn read_any(&mut self, reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
        let tag = reader.u8()?;
        match tag {
            TAG_NULL => Ok(Value::Null),
            TAG_FALSE => Ok(Value::Bool(false)),
            TAG_TRUE => Ok(Value::Bool(true)),
            TAG_INT32 => Ok(Value::Int32(reader.i32()?)),
            TAG_INT64 => Ok(Value::Int64(reader.i64()?)),
            TAG_FLOAT64 => Ok(Value::Float64(reader.f64()?)),
            TAG_TEXT => Ok(Value::Text(self.read_text(reader)?)),
            TAG_LIST => {
                let count = reader.u32()? as usize;
                // The count is read before the bytes backing it exist;
                // every element needs at least one byte, so cap the
                // preallocation by what the input can still hold.
                let mut items = Vec::with_capacity(count.min(reader.size()));
                for _ in 0..count {
                    items.push(self.read_any(reader)?);
                }
                Ok(Value::List(items))
            }
            TAG_MAP => {
                let count = reader.u32()? as usize;
                let mut pairs = Vec::with_capacity(count.min(reader.size()));
                for _ in 0..count {
                    let key = self.read_text(reader)?;
                    let value = self.read_any(reader)?;
                    pairs.push((key, value));
                }
                Ok(Value::Map(pairs))
            }
            other => Err(DecodeError::UnknownTag(other)),
        }
    }

    /// Reads a u32-length-prefixed UTF-8 string body (text payloads and
    /// map keys share this layout).
    fn read_text(&mut self, reader: &mut Reader<'_>) -> Result<String, DecodeError> {
        let len = reader.u32()? as usize;
        Ok(reader.utf8(len)?.to_string())
    }
}
