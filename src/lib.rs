//! # lookup-wire
//!
//! Message framing for a domain lookup (WHOIS-style) client/server pair.
//!
//! Every message is one frame: a 4-byte big-endian length followed by that
//! many bytes of JSON. Requests and responses have one shape each:
//!
//! - request: `{"command": "...", "domain": "..."}` (`command` omitted when empty)
//! - response: `{"domain", "registrar", "registration date", "expiration date", "nameservers"}`
//! - failed response: `{"error": "..."}`
//!
//! ## Layers
//!
//! - [`protocol`]: frame header, blocking encode/decode over `std::io`, and a
//!   frame buffer for chunked input
//! - [`codec`]: JSON payload encoding into a generic `serde_json::Value` tree
//! - [`message`]: typed [`Request`](message::Request) and
//!   [`Response`](message::Response), request validation, response formatting
//! - [`connection`]: async framed connection over tokio streams, with a
//!   per-connection lookup server loop
//!
//! ## Example
//!
//! ```
//! use lookup_wire::message::{format_response, parse_request, Request, Response};
//! use lookup_wire::protocol::{decode_message, encode_message};
//! use std::io::Cursor;
//!
//! let mut wire = Vec::new();
//! encode_message(&Request::new("example.com"), &mut wire).unwrap();
//!
//! let request = parse_request(&decode_message(&mut Cursor::new(&wire)).unwrap()).unwrap();
//! let reply = format_response(&Response::success(request.domain));
//! assert_eq!(reply["domain"], "example.com");
//! ```

pub mod codec;
pub mod connection;
pub mod error;
pub mod message;
pub mod protocol;

pub use connection::{request_lookup, serve_connection, Connection, ConnectionConfig, Lookup};
pub use error::{Result, WireError};
