use serde_json::json;
use shapepack::{
    decode_value, encode_value, value_from_json, value_to_json, EncodeError, Value, ValueDecoder,
    ValueEncoder,
};

#[test]
fn json_document_survives_the_binary_roundtrip() {
    let json = json!({
        "name": "run-17",
        "enabled": true,
        "retries": 3,
        "ratio": 0.625,
        "tags": ["a", "b", null],
        "nested": {"big": 9_000_000_000i64, "small": -1}
    });
    let value = value_from_json(&json).expect("convert");
    let bytes = encode_value(&value).expect("encode");
    let back = decode_value(&bytes).expect("decode");
    assert_eq!(back, value);
    assert_eq!(value_to_json(&back), json);
}

#[test]
fn encode_json_matches_the_converted_encoding() {
    let json = json!({"k": [1, 2.5, "x", false]});
    let mut encoder = ValueEncoder::new();
    let direct = encoder.encode_json(&json).expect("encode_json");
    let converted = encode_value(&value_from_json(&json).expect("convert")).expect("encode");
    assert_eq!(direct, converted);
}

#[test]
fn decode_json_reverses_encode_json() {
    let json = json!({"z": 1, "a": [true, null], "m": "last"});
    let mut encoder = ValueEncoder::new();
    let mut decoder = ValueDecoder::new();
    let bytes = encoder.encode_json(&json).expect("encode_json");
    assert_eq!(decoder.decode_json(&bytes).expect("decode_json"), json);
}

#[test]
fn object_key_order_is_kept() {
    let json = json!({"z": 0, "a": 1, "m": 2});
    let value = value_from_json(&json).expect("convert");
    let bytes = encode_value(&value).expect("encode");
    match decode_value(&bytes).expect("decode") {
        Value::Map(pairs) => {
            let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, vec!["z", "a", "m"]);
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn unsigned_overflow_is_an_unsupported_kind() {
    let json = json!([1, u64::MAX]);
    assert!(matches!(
        value_from_json(&json),
        Err(EncodeError::UnsupportedValueKind(_))
    ));
    let mut encoder = ValueEncoder::new();
    assert!(matches!(
        encoder.encode_json(&json),
        Err(EncodeError::UnsupportedValueKind(_))
    ));
}
