//! Mosaic nonce decoding.
//!
//! Older clients send the nonce as a plain integer; newer ones send the SDK's
//! nonce object, `{ "nonce": [b0, b1, b2, b3] }`, with the bytes in
//! little-endian order. Both collapse to one `u32`.

use serde_json::Value;

use crate::error::{Nem2Error, Result};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceInput {
    Plain(u32),
    LittleEndian([u8; 4]),
}

impl NonceInput {
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(_) => validation::int_value::<u32>(value, "nonce").map(Self::Plain),
            Value::Object(object) => {
                let bytes = object.get("nonce").ok_or_else(invalid_nonce)?;
                nonce_bytes(bytes).map(Self::LittleEndian)
            }
            _ => Err(invalid_nonce()),
        }
    }

    pub fn decode(self) -> u32 {
        match self {
            NonceInput::Plain(value) => value,
            NonceInput::LittleEndian(bytes) => u32::from_le_bytes(bytes),
        }
    }
}

/// Resolve either nonce encoding into its canonical value.
pub fn decode_nonce(value: &Value) -> Result<u32> {
    NonceInput::from_value(value).map(NonceInput::decode)
}

// A byte array serialized from a typed array can arrive as a list or as an
// index-keyed object ({"0": .., "1": .., ..}).
fn nonce_bytes(value: &Value) -> Result<[u8; 4]> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(object) => {
            let mut items = Vec::with_capacity(4);
            for index in 0..object.len() {
                items.push(object.get(&index.to_string()).ok_or_else(invalid_nonce)?);
            }
            items
        }
        _ => return Err(invalid_nonce()),
    };

    if items.len() != 4 {
        return Err(Nem2Error::invalid(format!(
            "Invalid nonce: expected 4 bytes, got {}",
            items.len()
        )));
    }

    let mut bytes = [0_u8; 4];
    for (slot, item) in bytes.iter_mut().zip(items) {
        *slot = validation::int_value::<u8>(item, "nonce")?;
    }
    Ok(bytes)
}

fn invalid_nonce() -> Nem2Error {
    Nem2Error::invalid("Invalid nonce: expected a 32-bit integer or {nonce: byte[4]}")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_and_wrapped_forms_agree() {
        assert_eq!(decode_nonce(&json!(5)).unwrap(), 5);
        assert_eq!(decode_nonce(&json!({ "nonce": [5, 0, 0, 0] })).unwrap(), 5);
    }

    #[test]
    fn wrapped_form_is_little_endian() {
        assert_eq!(
            decode_nonce(&json!({ "nonce": [0x78, 0x56, 0x34, 0x12] })).unwrap(),
            0x1234_5678
        );
    }

    #[test]
    fn index_keyed_bytes_are_accepted() {
        assert_eq!(
            decode_nonce(&json!({ "nonce": { "0": 1, "1": 1, "2": 0, "3": 0 } })).unwrap(),
            257
        );
    }

    #[test]
    fn input_shape_is_kept_visible() {
        assert_eq!(NonceInput::from_value(&json!(7)).unwrap(), NonceInput::Plain(7));
        assert_eq!(
            NonceInput::from_value(&json!({ "nonce": [7, 0, 0, 0] })).unwrap(),
            NonceInput::LittleEndian([7, 0, 0, 0])
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(decode_nonce(&json!("5")).is_err());
        assert!(decode_nonce(&json!([5, 0, 0, 0])).is_err());
        assert!(decode_nonce(&json!({ "value": [5, 0, 0, 0] })).is_err());
        assert!(decode_nonce(&json!({ "nonce": [5, 0, 0] })).is_err());
        assert!(decode_nonce(&json!({ "nonce": [256, 0, 0, 0] })).is_err());
        assert!(decode_nonce(&json!(-1)).is_err());
        assert!(decode_nonce(&json!(4_294_967_296_u64)).is_err());
        assert!(decode_nonce(&json!(1.5)).is_err());
    }

    proptest! {
        #[test]
        fn both_encodings_decode_identically(value in any::<u32>()) {
            let bytes = value.to_le_bytes();
            let plain = decode_nonce(&json!(value)).expect("plain nonce should decode");
            let wrapped = decode_nonce(&json!({ "nonce": bytes }))
                .expect("wrapped nonce should decode");
            prop_assert_eq!(plain, value);
            prop_assert_eq!(wrapped, value);
        }
    }
}
