//! Flat list codec wrapper, instantiated per numeric kind.

use std::marker::PhantomData;

use crate::error::{DecodeError, EncodeError};
use crate::flat::{FlatListDecoder, FlatListEncoder};
use crate::num::WireNumber;

/// Paired encoder/decoder for flat numeric lists of one kind.
pub struct FlatListBinCodec<T: WireNumber> {
    pub encoder: FlatListEncoder,
    pub decoder: FlatListDecoder,
    _kind: PhantomData<T>,
}

impl<T: WireNumber> Default for FlatListBinCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WireNumber> FlatListBinCodec<T> {
    pub fn new() -> Self {
        Self {
            encoder: FlatListEncoder::new(),
            decoder: FlatListDecoder::new(),
            _kind: PhantomData,
        }
    }

    /// The numeric kind this instantiation carries.
    pub fn kind(&self) -> &'static str {
        T::KIND
    }

    pub fn encode(&mut self, values: &[T]) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode(values)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
        self.decoder.decode(bytes)
    }
}
