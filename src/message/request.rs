//! Lookup request and its strict conversion from a generic value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire_names;
use crate::error::{Result, WireError};

/// A domain lookup request.
///
/// Serializes as `{"command": ..., "domain": ...}` with `command` omitted
/// when empty. An empty command means the default lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Lookup variant; empty for the default lookup.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
    /// Domain to look up. Passed through as received.
    pub domain: String,
}

impl Request {
    /// Default lookup for `domain`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            command: String::new(),
            domain: domain.into(),
        }
    }

    /// Set the command.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }
}

/// Convert a decoded message into a [`Request`].
///
/// Checks, in order:
/// 1. the value is an object, else `InvalidFormat`
/// 2. it has a string `domain`, else `MissingDomain`
///
/// A `command` that is not a string is treated as absent rather than
/// rejected. No trimming or case folding happens here.
///
/// # Example
///
/// ```
/// use lookup_wire::message::parse_request;
/// use serde_json::json;
///
/// let request = parse_request(&json!({"domain": "example.com", "command": 42})).unwrap();
/// assert_eq!(request.domain, "example.com");
/// assert_eq!(request.command, "");
/// ```
pub fn parse_request(message: &Value) -> Result<Request> {
    let object = message.as_object().ok_or(WireError::InvalidFormat)?;

    let domain = object
        .get(wire_names::DOMAIN)
        .and_then(Value::as_str)
        .ok_or(WireError::MissingDomain)?;

    let command = object
        .get(wire_names::COMMAND)
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(Request {
        command: command.to_string(),
        domain: domain.to_string(),
    })
}
