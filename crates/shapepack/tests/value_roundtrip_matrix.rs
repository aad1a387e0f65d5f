use shapepack::generic::constants::{TAG_INT32, TAG_INT64};
use shapepack::{decode_value, encode_value, DecodeError, Value};

fn roundtrip(value: &Value) -> Value {
    let bytes = encode_value(value).expect("encode");
    decode_value(&bytes).expect("decode")
}

#[test]
fn scalar_matrix() {
    let cases = vec![
        Value::Null,
        Value::Bool(false),
        Value::Bool(true),
        Value::Int32(0),
        Value::Int32(i32::MIN),
        Value::Int32(i32::MAX),
        Value::Int64(i64::MIN),
        Value::Int64(i64::MAX),
        Value::Float64(0.0),
        Value::Float64(-1.5),
        Value::Float64(f64::MAX),
        Value::Float64(f64::MIN_POSITIVE),
        Value::Text(String::new()),
        Value::Text("h\u{e9}llo \u{20ac}".into()),
        Value::Text("x".repeat(70_000)),
    ];
    for case in cases {
        assert_eq!(roundtrip(&case), case, "case: {case:?}");
    }
}

#[test]
fn integer_boundary_crosses_without_loss() {
    let at_max = Value::int(2_147_483_647);
    assert_eq!(at_max, Value::Int32(2_147_483_647));
    assert_eq!(roundtrip(&at_max), at_max);

    let past_max = Value::int(2_147_483_648);
    assert_eq!(past_max, Value::Int64(2_147_483_648));
    assert_eq!(roundtrip(&past_max), past_max);

    let at_min = Value::int(-2_147_483_648);
    assert_eq!(at_min, Value::Int32(-2_147_483_648));
    assert_eq!(roundtrip(&at_min), at_min);

    let past_min = Value::int(-2_147_483_649);
    assert_eq!(past_min, Value::Int64(-2_147_483_649));
    assert_eq!(roundtrip(&past_min), past_min);
}

#[test]
fn integer_boundary_tags_on_the_wire() {
    let bytes = encode_value(&Value::int(2_147_483_647)).expect("encode");
    assert_eq!(bytes[0], TAG_INT32);
    let bytes = encode_value(&Value::int(2_147_483_648)).expect("encode");
    assert_eq!(bytes[0], TAG_INT64);
}

#[test]
fn empty_containers_stay_empty() {
    assert_eq!(roundtrip(&Value::List(vec![])), Value::List(vec![]));
    assert_eq!(roundtrip(&Value::Map(vec![])), Value::Map(vec![]));
}

#[test]
fn heterogeneous_list_keeps_order_and_kinds() {
    let value = Value::List(vec![
        Value::Bool(true),
        Value::int(42),
        Value::Float64(3.14),
        Value::Text("x".into()),
        Value::Map(vec![("a".into(), Value::int(1))]),
    ]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn duplicate_map_keys_survive_in_order() {
    let value = Value::Map(vec![
        ("k".into(), Value::Text("v1".into())),
        ("k".into(), Value::Text("v2".into())),
    ]);
    let back = roundtrip(&value);
    match &back {
        Value::Map(pairs) => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[0], ("k".into(), Value::Text("v1".into())));
            assert_eq!(pairs[1], ("k".into(), Value::Text("v2".into())));
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn three_hundred_levels_of_nesting() {
    let mut value = Value::int(1);
    for _ in 0..300 {
        value = Value::List(vec![value]);
    }
    assert_eq!(value.depth(), 300);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn float_precision_is_bit_exact() {
    for f in [3.141592653589793, 2.718281828459045, 1.0e-300, -1.0e300] {
        let bytes = encode_value(&Value::Float64(f)).expect("encode");
        match decode_value(&bytes).expect("decode") {
            Value::Float64(back) => assert_eq!(back.to_bits(), f.to_bits()),
            other => panic!("expected float, got {other:?}"),
        }
    }
}

#[test]
fn unknown_tag_rejects_the_whole_input() {
    assert_eq!(decode_value(&[0x09]), Err(DecodeError::UnknownTag(0x09)));
    assert_eq!(decode_value(&[0xff]), Err(DecodeError::UnknownTag(0xff)));
}
