use shapepack::chain::constants::{NODE_INNER, NODE_LEAF};
use shapepack::{decode_deep_chain, encode_deep_chain, DecodeError, DeepChain};

#[test]
fn depth_five_int_chain_roundtrips() {
    let chain = DeepChain::wrapped(5, vec![1i64, 2, 3]);
    let bytes = encode_deep_chain(&chain).expect("encode");
    let back: DeepChain<i64> = decode_deep_chain(&bytes).expect("decode");
    assert_eq!(back, chain);
    assert_eq!(back.depth(), 5);
    assert_eq!(back.leaf_values(), &[1, 2, 3]);
}

#[test]
fn float_chain_roundtrips() {
    let chain = DeepChain::wrapped(2, vec![0.5f64, -1.25, 1.0e12]);
    let bytes = encode_deep_chain(&chain).expect("encode");
    assert_eq!(decode_deep_chain::<f64>(&bytes).expect("decode"), chain);
}

#[test]
fn bare_leaf_and_empty_leaf_roundtrip() {
    let chain = DeepChain::leaf(vec![7i64]);
    let bytes = encode_deep_chain(&chain).expect("encode");
    assert_eq!(decode_deep_chain::<i64>(&bytes).expect("decode"), chain);

    let empty: DeepChain<i64> = DeepChain::leaf(vec![]);
    let bytes = encode_deep_chain(&empty).expect("encode");
    assert_eq!(decode_deep_chain::<i64>(&bytes).expect("decode"), empty);
}

#[test]
fn four_hundred_inner_levels() {
    let chain = DeepChain::wrapped(400, vec![42i64]);
    let bytes = encode_deep_chain(&chain).expect("encode");
    // One marker per level plus the leaf marker, count, and value.
    assert_eq!(bytes.len(), 400 + 1 + 4 + 8);
    assert_eq!(decode_deep_chain::<i64>(&bytes).expect("decode"), chain);
}

#[test]
fn node_with_neither_child_nor_leaf_is_a_hard_error() {
    // A marker that claims neither state must abort the decode; reading
    // it as an empty leaf would hide producer bugs.
    let result = decode_deep_chain::<i64>(&[0x00]);
    assert_eq!(result, Err(DecodeError::MalformedChainNode(0x00)));

    let result = decode_deep_chain::<i64>(&[NODE_INNER, NODE_INNER, 0x1f]);
    assert_eq!(result, Err(DecodeError::MalformedChainNode(0x1f)));
}

#[test]
fn malformed_node_never_reads_as_an_empty_leaf() {
    let empty_leaf_bytes = encode_deep_chain(&DeepChain::<i64>::leaf(vec![])).expect("encode");
    assert_eq!(empty_leaf_bytes, vec![NODE_LEAF, 0, 0, 0, 0]);
    // The malformed marker occupies the same position but must not be
    // interpreted the same way.
    assert!(decode_deep_chain::<i64>(&[0x00, 0, 0, 0, 0]).is_err());
}
