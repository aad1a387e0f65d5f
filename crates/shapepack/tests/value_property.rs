//! Property test for the round-trip law over generated value trees.

use proptest::collection::vec;
use proptest::prelude::*;
use shapepack::{decode_value, encode_value, Value};

/// Canonical values only: integers go through `Value::int`, floats stay
/// finite so structural equality is meaningful.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        any::<f64>()
            .prop_filter("finite floats only", |f| f.is_finite())
            .prop_map(Value::Float64),
        "[a-zA-Z0-9]{0,16}".prop_map(Value::Text),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..6).prop_map(Value::List),
            vec(("[a-z]{0,8}", inner), 0..6).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn roundtrip_law(value in value_strategy()) {
        let bytes = encode_value(&value).expect("encode");
        prop_assert_eq!(decode_value(&bytes).expect("decode"), value);
    }

    #[test]
    fn encoding_is_deterministic(value in value_strategy()) {
        let first = encode_value(&value).expect("encode");
        let second = encode_value(&value).expect("encode");
        prop_assert_eq!(first, second);
    }
}
