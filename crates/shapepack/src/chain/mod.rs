//! Deep chain codec: singly-nested wrapper levels over one numeric leaf.
//!
//! The wire form is one marker byte per level - "inner, recurse" or
//! "leaf, here are N values" - so the encoded size grows linearly with
//! depth. A marker that is neither inner nor leaf is a hard decode error,
//! never an empty leaf.

pub mod constants;

mod decoder;
mod encoder;
mod types;

pub use decoder::ChainDecoder;
pub use encoder::ChainEncoder;
pub use types::DeepChain;
