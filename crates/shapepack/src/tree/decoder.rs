//! Labeled tree decoder.

use shapepack_buffers::Reader;

use super::types::LabeledTree;
use crate::error::DecodeError;

/// A node whose label and child count have been read but whose children
/// are still being collected.
struct Frame {
    data: i64,
    remaining: u32,
    children: Vec<LabeledTree>,
}

/// Decoder for the labeled tree format.
///
/// Rebuilds the preorder layout with an explicit frame stack; children
/// reattach to their parent in original order.
#[derive(Default)]
pub struct TreeDecoder;

impl TreeDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one tree from `bytes`.
    ///
    /// A failed decode drops every frame built so far and returns the
    /// error alone.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<LabeledTree, DecodeError> {
        let mut reader = Reader::new(bytes);
        let mut stack: Vec<Frame> = Vec::new();
        let mut current = read_frame(&mut reader)?;
        loop {
            if current.remaining > 0 {
                current.remaining -= 1;
                let next = read_frame(&mut reader)?;
                stack.push(current);
                current = next;
            } else {
                let node = LabeledTree {
                    data: current.data,
                    children: current.children,
                };
                match stack.pop() {
                    Some(mut parent) => {
                        parent.children.push(node);
                        current = parent;
                    }
                    None => return Ok(node),
                }
            }
        }
    }
}

fn read_frame(reader: &mut Reader<'_>) -> Result<Frame, DecodeError> {
    let data = reader.i64()?;
    let remaining = reader.u32()?;
    // Each claimed child costs at least 12 bytes on the wire; cap the
    // preallocation by what the input can still hold.
    let capacity = (remaining as usize).min(reader.size() / 12);
    Ok(Frame {
        data,
        remaining,
        children: Vec::with_capacity(capacity),
    })
}
