//! Message module - typed requests and responses on top of the frame codec.
//!
//! Incoming frames decode to a generic [`serde_json::Value`]; this module
//! turns that tree into typed messages with explicit failure variants, and
//! typed responses back into the value the codec writes.

mod request;
mod response;

pub use request::{parse_request, Request};
pub use response::{format_response, parse_response, Response};

/// Wire names of message fields.
///
/// These must match the `#[serde(rename)]` attributes on [`Request`] and
/// [`Response`]; peers depend on them byte for byte.
pub mod wire_names {
    /// Request command.
    pub const COMMAND: &str = "command";
    /// Looked-up domain (request and response).
    pub const DOMAIN: &str = "domain";
    /// Registrar name.
    pub const REGISTRAR: &str = "registrar";
    /// Registration date.
    pub const REGISTRATION_DATE: &str = "registration date";
    /// Expiration date.
    pub const EXPIRATION_DATE: &str = "expiration date";
    /// Name server list.
    pub const NAME_SERVERS: &str = "nameservers";
    /// Reserved key of an error response.
    pub const ERROR: &str = "error";
}
