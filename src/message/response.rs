//! Lookup response and its wire representation.
//!
//! A successful response goes out with every field present:
//!
//! ```text
//! {"domain": .., "registrar": .., "registration date": ..,
//!  "expiration date": .., "nameservers": [..]}
//! ```
//!
//! A failed one collapses to `{"error": ..}` and nothing else.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::wire_names;
use crate::error::{Result, WireError};

/// Result of a domain lookup.
///
/// When `error_message` is non-empty every other field is ignored on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Domain the lookup was for.
    pub domain: String,
    /// Registrar name.
    pub registrar: String,
    /// Registration date, as reported by the registry.
    #[serde(rename = "registration date")]
    pub registration_date: String,
    /// Expiration date, as reported by the registry.
    #[serde(rename = "expiration date")]
    pub expiration_date: String,
    /// Name servers, in registry order.
    #[serde(rename = "nameservers", deserialize_with = "null_as_empty")]
    pub name_servers: Vec<String>,
    /// Lookup failure description; empty on success.
    #[serde(rename = "error", default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
}

/// Older servers send a missing name server list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Response {
    /// Successful response for `domain` with every other field empty.
    pub fn success(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Failed lookup.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
            ..Self::default()
        }
    }

    /// True when this response carries an error message.
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

/// Convert a [`Response`] into the value that goes on the wire.
///
/// # Example
///
/// ```
/// use lookup_wire::message::{format_response, Response};
/// use serde_json::json;
///
/// let mut response = Response::success("x");
/// response.error_message = "not found".to_string();
/// assert_eq!(format_response(&response), json!({"error": "not found"}));
/// ```
pub fn format_response(response: &Response) -> Value {
    let mut object = Map::new();

    if response.is_error() {
        object.insert(
            wire_names::ERROR.to_string(),
            Value::String(response.error_message.clone()),
        );
        return Value::Object(object);
    }

    let strings = [
        (wire_names::DOMAIN, &response.domain),
        (wire_names::REGISTRAR, &response.registrar),
        (wire_names::REGISTRATION_DATE, &response.registration_date),
        (wire_names::EXPIRATION_DATE, &response.expiration_date),
    ];
    for (name, value) in strings {
        object.insert(name.to_string(), Value::String(value.clone()));
    }
    object.insert(
        wire_names::NAME_SERVERS.to_string(),
        Value::Array(
            response
                .name_servers
                .iter()
                .cloned()
                .map(Value::String)
                .collect(),
        ),
    );

    Value::Object(object)
}

/// Convert a decoded reply back into a [`Response`].
///
/// An object with a non-empty string `error` becomes an error response.
/// Anything else must carry the full success shape, so an empty or
/// non-string `error` never reads as a successful lookup.
///
/// # Errors
///
/// `InvalidFormat` if the value is not an object, `MalformedPayload` if a
/// success object is missing fields or has the wrong types.
pub fn parse_response(message: Value) -> Result<Response> {
    let object = message.as_object().ok_or(WireError::InvalidFormat)?;

    if let Some(error) = object
        .get(wire_names::ERROR)
        .and_then(Value::as_str)
        .filter(|error| !error.is_empty())
    {
        return Ok(Response::error(error));
    }

    serde_json::from_value(message).map_err(WireError::MalformedPayload)
}
