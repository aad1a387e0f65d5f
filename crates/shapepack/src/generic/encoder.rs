//! Encoder for the self-describing value format.

use shapepack_buffers::Writer;

use super::constants::*;
use crate::error::EncodeError;
use crate::value::Value;

/// Encoder for the self-describing value format.
///
/// Encoding recurses over the value tree, so the supported nesting depth
/// is bounded by the call stack; depths into the low hundreds are fine.
///
/// The writer is only flushed after the whole value has been written, so a
/// failed encode leaves no partial output in the caller's hands.
pub struct ValueEncoder {
    pub writer: Writer,
}

impl Default for ValueEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one value and returns the bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int32(n) => self.write_integer(*n as i64),
            Value::Int64(n) => self.write_integer(*n),
            Value::Float64(f) => self.write_float(*f),
            Value::Text(s) => return self.write_text(s),
            Value::List(items) => return self.write_list(items),
            Value::Map(pairs) => return self.write_map(pairs),
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.u8(TAG_NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { TAG_TRUE } else { TAG_FALSE });
    }

    /// Writes the narrowest integer representation that holds `n`.
    ///
    /// Width is decided by magnitude alone; the variant the caller chose
    /// does not enter into it.
    pub fn write_integer(&mut self, n: i64) {
        if n >= i32::MIN as i64 && n <= i32::MAX as i64 {
            self.writer.u8(TAG_INT32);
            self.writer.i32(n as i32);
        } else {
            self.writer.u8(TAG_INT64);
            self.writer.i64(n);
        }
    }

    pub fn write_float(&mut self, f: f64) {
        self.writer.u8(TAG_FLOAT64);
        self.writer.f64(f);
    }

    pub fn write_text(&mut self, s: &str) -> Result<(), EncodeError> {
        self.writer.u8(TAG_TEXT);
        self.write_len(s.len())?;
        self.writer.buf(s.as_bytes());
        Ok(())
    }

    pub fn write_list(&mut self, items: &[Value]) -> Result<(), EncodeError> {
        self.writer.u8(TAG_LIST);
        self.write_len(items.len())?;
        for item in items {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map(&mut self, pairs: &[(String, Value)]) -> Result<(), EncodeError> {
        self.writer.u8(TAG_MAP);
        self.write_len(pairs.len())?;
        for (key, value) in pairs {
            self.write_len(key.len())?;
            self.writer.buf(key.as_bytes());
            self.write_any(value)?;
        }
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<(), EncodeError> {
        let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow)?;
        self.writer.u32(len);
        Ok(())
    }
}

// ---- JSON ingestion ----

impl ValueEncoder {
    /// Encodes a `serde_json::Value` directly, mapping numbers onto the
    /// narrowest scalar kind that holds their magnitude.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_json(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_json(&mut self, value: &serde_json::Value) -> Result<(), EncodeError> {
        match value {
            serde_json::Value::Null => self.write_null(),
            serde_json::Value::Bool(b) => self.write_boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    self.write_integer(i);
                } else if n.is_u64() {
                    // u64 above i64::MAX fits no scalar kind; rounding it
                    // through f64 would lose the magnitude silently.
                    return Err(EncodeError::UnsupportedValueKind(
                        "unsigned integer above i64 range",
                    ));
                } else if let Some(f) = n.as_f64() {
                    self.write_float(f);
                } else {
                    return Err(EncodeError::UnsupportedValueKind("number"));
                }
            }
            serde_json::Value::String(s) => return self.write_text(s),
            serde_json::Value::Array(items) => {
                self.writer.u8(TAG_LIST);
                self.write_len(items.len())?;
                for item in items {
                    self.write_json(item)?;
                }
            }
            serde_json::Value::Object(obj) => {
                self.writer.u8(TAG_MAP);
                self.write_len(obj.len())?;
                for (key, value) in obj {
                    self.write_len(key.len())?;
                    self.writer.buf(key.as_bytes());
                    self.write_json(value)?;
                }
            }
        }
        Ok(())
    }
}
