//! Chain codec wrapper, instantiated per numeric kind.

use std::marker::PhantomData;

use crate::chain::{ChainDecoder, ChainEncoder, DeepChain};
use crate::error::{DecodeError, EncodeError};
use crate::num::WireNumber;

/// Paired encoder/decoder for the chain format over one numeric kind.
pub struct ChainBinCodec<T: WireNumber> {
    pub encoder: ChainEncoder,
    pub decoder: ChainDecoder,
    _kind: PhantomData<T>,
}

impl<T: WireNumber> Default for ChainBinCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WireNumber> ChainBinCodec<T> {
    pub fn new() -> Self {
        Self {
            encoder: ChainEncoder::new(),
            decoder: ChainDecoder::new(),
            _kind: PhantomData,
        }
    }

    /// The numeric kind this instantiation carries.
    pub fn kind(&self) -> &'static str {
        T::KIND
    }

    pub fn encode(&mut self, chain: &DeepChain<T>) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode(chain)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<DeepChain<T>, DecodeError> {
        self.decoder.decode(bytes)
    }
}
