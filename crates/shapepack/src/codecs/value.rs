//! Generic value codec wrapper.

use crate::error::{DecodeError, EncodeError};
use crate::generic::{ValueDecoder, ValueEncoder};
use crate::value::Value;

/// Paired encoder/decoder for the self-describing value format.
pub struct ValueBinCodec {
    pub encoder: ValueEncoder,
    pub decoder: ValueDecoder,
}

impl Default for ValueBinCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueBinCodec {
    pub fn new() -> Self {
        Self {
            encoder: ValueEncoder::new(),
            decoder: ValueDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "value"
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode(value)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, DecodeError> {
        self.decoder.decode(bytes)
    }

    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode_json(value)
    }

    pub fn decode_json(&mut self, bytes: &[u8]) -> Result<serde_json::Value, DecodeError> {
        self.decoder.decode_json(bytes)
    }
}
