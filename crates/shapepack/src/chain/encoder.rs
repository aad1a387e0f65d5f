//! Chain encoder.

use shapepack_buffers::Writer;

use super::constants::{NODE_INNER, NODE_LEAF};
use super::types::DeepChain;
use crate::error::EncodeError;
use crate::num::WireNumber;

/// Encoder for the chain format.
///
/// Descends inner levels in a loop (no call-stack recursion), emitting one
/// marker byte per level and the counted values at the leaf.
pub struct ChainEncoder {
    pub writer: Writer,
}

impl Default for ChainEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one chain and returns the bytes.
    pub fn encode<T: WireNumber>(&mut self, chain: &DeepChain<T>) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        let mut node = chain;
        loop {
            match node {
                DeepChain::Inner(child) => {
                    self.writer.u8(NODE_INNER);
                    node = child;
                }
                DeepChain::Leaf(values) => {
                    self.writer.u8(NODE_LEAF);
                    let count =
                        u32::try_from(values.len()).map_err(|_| EncodeError::LengthOverflow)?;
                    self.writer.u32(count);
                    for value in values {
                        value.write(&mut self.writer);
                    }
                    break;
                }
            }
        }
        Ok(self.writer.flush())
    }
}
