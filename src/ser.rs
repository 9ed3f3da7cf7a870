//! Serde forwarding.
//!
//! The wire form of a wrapper is exactly the raw value's wire form; the tag
//! never appears in serialized data, so downstream systems cannot tell a
//! wrapped value from a bare one. Decode failures are the raw type's own.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tagged;

impl<V: Serialize, Tag> Serialize for Tagged<V, Tag> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>, Tag> Deserialize<'de> for Tagged<V, Tag> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        V::deserialize(deserializer).map(Tagged::new)
    }
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use crate::Tagged;

    enum Id {}

    #[test]
    fn wire_form_equals_the_raw_wire_form() {
        let raw: Vec<u32> = vec![1, 2, 3];
        let wrapped: Tagged<Vec<u32>, Id> = Tagged::new(raw.clone());
        assert_eq!(
            serde_json::to_string(&wrapped).unwrap(),
            serde_json::to_string(&raw).unwrap()
        );
    }

    #[test]
    fn decoding_wraps_the_raw_decode() {
        let n: Tagged<i64, Id> = serde_json::from_str("42").unwrap();
        assert_eq!(n, Tagged::new(42));
    }

    #[test]
    fn decode_failure_is_the_raw_failure() {
        let wrapped = serde_json::from_str::<Tagged<i64, Id>>("\"abc\"");
        let raw = serde_json::from_str::<i64>("\"abc\"");
        assert!(wrapped.is_err());
        assert_eq!(
            wrapped.unwrap_err().to_string(),
            raw.unwrap_err().to_string()
        );
    }

    #[test]
    fn round_trip_preserves_the_wrapper() {
        let user: Tagged<String, Id> = Tagged::new(String::from("user@name.com"));
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, "\"user@name.com\"");
        let back: Tagged<String, Id> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
