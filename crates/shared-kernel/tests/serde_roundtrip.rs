// crates/shared-kernel/tests/serde_roundtrip.rs
use numtext_shared_kernel::{Frequency, LineNumber};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    line: LineNumber,
    frequency: Frequency,
}

#[test]
fn json_is_transparent() {
    let original = Wrapper { line: LineNumber::from(42), frequency: Frequency::from(3) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"line":42,"frequency":3}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
