//! Compact self-describing binary encodings for dynamically-shaped values.
//!
//! shapepack is a family of small binary codecs built for round-trip
//! fidelity:
//!
//! - a generic, self-describing codec for arbitrary [`Value`] trees
//!   (scalars, heterogeneous lists, ordered maps with duplicate keys);
//! - fixed-schema codecs for the shapes a schema-driven format would
//!   special-case: singly-nested numeric chains ([`DeepChain`]), flat
//!   numeric lists, and integer-labeled n-ary trees ([`LabeledTree`]).
//!
//! Every codec is a pure function of its input: stateless between calls,
//! purely synchronous, safe to run from any number of threads at once.
//! Malformed input surfaces as a [`DecodeError`]; a failing decode never
//! returns a partially built structure.
//!
//! # Example
//!
//! ```
//! use shapepack::{decode_value, encode_value, Value};
//!
//! let value = Value::List(vec![
//!     Value::Bool(true),
//!     Value::int(42),
//!     Value::Text("x".into()),
//! ]);
//! let bytes = encode_value(&value)?;
//! assert_eq!(decode_value(&bytes)?, value);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod convert;
mod error;
mod num;
mod value;

pub mod chain;
pub mod codecs;
pub mod flat;
pub mod generic;
pub mod tree;

pub use chain::{ChainDecoder, ChainEncoder, DeepChain};
pub use convert::{value_from_json, value_to_json};
pub use error::{DecodeError, EncodeError};
pub use flat::{FlatListDecoder, FlatListEncoder};
pub use generic::{ValueDecoder, ValueEncoder};
pub use num::WireNumber;
pub use tree::{LabeledTree, TreeDecoder, TreeEncoder};
pub use value::Value;

/// Encodes one [`Value`] with the self-describing format.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
    ValueEncoder::new().encode(value)
}

/// Decodes one [`Value`] from the front of `bytes`.
pub fn decode_value(bytes: &[u8]) -> Result<Value, DecodeError> {
    ValueDecoder::new().decode(bytes)
}

/// Encodes one [`DeepChain`] of either numeric kind.
pub fn encode_deep_chain<T: WireNumber>(chain: &DeepChain<T>) -> Result<Vec<u8>, EncodeError> {
    ChainEncoder::new().encode(chain)
}

/// Decodes one [`DeepChain`]; the numeric kind is chosen by the caller's
/// type, exactly as it was at encode time.
pub fn decode_deep_chain<T: WireNumber>(bytes: &[u8]) -> Result<DeepChain<T>, DecodeError> {
    ChainDecoder::new().decode(bytes)
}

/// Encodes a flat numeric list.
pub fn encode_flat_list<T: WireNumber>(values: &[T]) -> Result<Vec<u8>, EncodeError> {
    FlatListEncoder::new().encode(values)
}

/// Decodes a flat numeric list.
pub fn decode_flat_list<T: WireNumber>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    FlatListDecoder::new().decode(bytes)
}

/// Encodes one [`LabeledTree`].
pub fn encode_labeled_tree(tree: &LabeledTree) -> Result<Vec<u8>, EncodeError> {
    TreeEncoder::new().encode(tree)
}

/// Decodes one [`LabeledTree`].
pub fn decode_labeled_tree(bytes: &[u8]) -> Result<LabeledTree, DecodeError> {
    TreeDecoder::new().decode(bytes)
}
