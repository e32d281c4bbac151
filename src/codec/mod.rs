//! Codec module - serialization/deserialization for payloads.
//!
//! - [`JsonCodec`] - JSON text using `serde_json`, decoding to a generic
//!   [`serde_json::Value`] tree or directly to a typed value
//!
//! # Design
//!
//! Codecs are marker structs with static methods rather than trait objects.
//! The frame layer stays agnostic of message shape: it only moves bytes, and
//! the codec turns those bytes into a value tree.

mod json;

pub use json::JsonCodec;
