//! Labeled tree codec wrapper.

use crate::error::{DecodeError, EncodeError};
use crate::tree::{LabeledTree, TreeDecoder, TreeEncoder};

/// Paired encoder/decoder for the labeled tree format.
pub struct TreeBinCodec {
    pub encoder: TreeEncoder,
    pub decoder: TreeDecoder,
}

impl Default for TreeBinCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBinCodec {
    pub fn new() -> Self {
        Self {
            encoder: TreeEncoder::new(),
            decoder: TreeDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "tree"
    }

    pub fn encode(&mut self, tree: &LabeledTree) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode(tree)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<LabeledTree, DecodeError> {
        self.decoder.decode(bytes)
    }
}
