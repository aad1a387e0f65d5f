//! Chain decoder.

use shapepack_buffers::Reader;

use super::constants::{NODE_INNER, NODE_LEAF};
use super::types::DeepChain;
use crate::error::DecodeError;
use crate::num::WireNumber;

/// Decoder for the chain format.
///
/// Reads marker bytes in a loop until the leaf. A node must be exactly one
/// of inner or leaf; any other marker aborts with
/// [`DecodeError::MalformedChainNode`] - it is never read as an empty
/// leaf.
#[derive(Default)]
pub struct ChainDecoder;

impl ChainDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one chain from `bytes`.
    pub fn decode<T: WireNumber>(&mut self, bytes: &[u8]) -> Result<DeepChain<T>, DecodeError> {
        let mut reader = Reader::new(bytes);
        let mut depth = 0usize;
        loop {
            match reader.u8()? {
                NODE_INNER => depth += 1,
                NODE_LEAF => {
                    let count = reader.u32()? as usize;
                    let mut values = Vec::with_capacity(count.min(reader.size()));
                    for _ in 0..count {
                        values.push(T::read(&mut reader)?);
                    }
                    return Ok(DeepChain::wrapped(depth, values));
                }
                other => return Err(DecodeError::MalformedChainNode(other)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neither_inner_nor_leaf_is_malformed() {
        let mut dec = ChainDecoder::new();
        let result: Result<DeepChain<i64>, _> = dec.decode(&[0x00]);
        assert_eq!(result, Err(DecodeError::MalformedChainNode(0x00)));
    }

    #[test]
    fn malformed_marker_below_an_inner_level() {
        let mut dec = ChainDecoder::new();
        let result: Result<DeepChain<i64>, _> = dec.decode(&[NODE_INNER, NODE_INNER, 0x07]);
        assert_eq!(result, Err(DecodeError::MalformedChainNode(0x07)));
    }

    #[test]
    fn missing_marker_is_truncation_not_malformation() {
        let mut dec = ChainDecoder::new();
        let result: Result<DeepChain<i64>, _> = dec.decode(&[NODE_INNER]);
        assert_eq!(result, Err(DecodeError::TruncatedInput));
    }
}
