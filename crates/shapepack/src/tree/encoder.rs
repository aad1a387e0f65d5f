//! Labeled tree encoder.

use shapepack_buffers::Writer;

use super::types::LabeledTree;
use crate::error::EncodeError;

/// Encoder for the labeled tree format.
///
/// Walks the tree in preorder with an explicit stack; a deep or wide tree
/// costs heap, never call-stack depth.
pub struct TreeEncoder {
    pub writer: Writer,
}

impl Default for TreeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one tree and returns the bytes.
    pub fn encode(&mut self, tree: &LabeledTree) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        let mut stack = vec![tree];
        while let Some(node) = stack.pop() {
            self.writer.i64(node.data);
            let count =
                u32::try_from(node.children.len()).map_err(|_| EncodeError::LengthOverflow)?;
            self.writer.u32(count);
            // Reversed so the first child is popped (and written) next.
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        Ok(self.writer.flush())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leaf_layout() {
        let mut enc = TreeEncoder::new();
        let bytes = enc.encode(&LabeledTree::leaf(7)).unwrap();
        // 8-byte label + u32 child count of zero
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..8], &7i64.to_be_bytes());
        assert_eq!(&bytes[8..], &[0, 0, 0, 0]);
    }

    #[test]
    fn children_are_written_in_original_order() {
        let mut enc = TreeEncoder::new();
        let tree = LabeledTree::node(0, vec![LabeledTree::leaf(1), LabeledTree::leaf(2)]);
        let bytes = enc.encode(&tree).unwrap();
        // root, then child 1, then child 2
        assert_eq!(&bytes[12..20], &1i64.to_be_bytes());
        assert_eq!(&bytes[24..32], &2i64.to_be_bytes());
    }
}
