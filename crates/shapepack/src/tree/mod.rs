//! Labeled tree codec: n-ary trees of integer-labeled nodes.
//!
//! Preorder layout: each node writes its label and child count, then its
//! children in original order. Both directions use explicit heap stacks -
//! branching and depth are unbounded in benchmark inputs, so nothing here
//! may lean on the call stack.

mod decoder;
mod encoder;
mod types;

pub use decoder::TreeDecoder;
pub use encoder::TreeEncoder;
pub use types::LabeledTree;
