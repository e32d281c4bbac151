//! JSON codec using `serde_json`.
//!
//! Payloads are UTF-8 JSON text. Struct field names are written as-is, or as
//! given by `#[serde(rename = "...")]`, which is how the wire names
//! `"registration date"` and friends are produced.
//!
//! # Example
//!
//! ```
//! use lookup_wire::codec::JsonCodec;
//! use serde_json::json;
//!
//! let encoded = JsonCodec::encode(&json!({"domain": "example.com"})).unwrap();
//! let decoded = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded["domain"], "example.com");
//! ```

use serde_json::Value;

use crate::error::{Result, WireError};

/// JSON codec for structured payloads.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the value cannot be represented as JSON
    /// (for example a map with non-string keys).
    #[inline]
    pub fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(WireError::Serialization)
    }

    /// Decode JSON bytes into a generic value tree.
    ///
    /// An empty payload decodes to `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the bytes are not valid JSON.
    #[inline]
    pub fn decode(bytes: &[u8]) -> Result<Value> {
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(bytes).map_err(WireError::MalformedPayload)
    }

    /// Decode JSON bytes directly into a typed value.
    ///
    /// An empty payload deserializes from `null`, so `Option<T>`, `()` and
    /// `Value` accept it.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the bytes are not valid JSON or do not
    /// match the shape of `T`.
    #[inline]
    pub fn decode_as<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        if bytes.is_empty() {
            return serde_json::from_value(Value::Null).map_err(WireError::MalformedPayload);
        }
        serde_json::from_slice(bytes).map_err(WireError::MalformedPayload)
    }
}
