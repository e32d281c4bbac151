//! Frame struct and contiguous frame building.
//!
//! Represents one decoded frame payload. Uses `bytes::Bytes` so frames cut
//! out of a [`FrameBuffer`](super::FrameBuffer) share its allocation.
//!
//! # Example
//!
//! ```
//! use lookup_wire::protocol::{build_frame, Frame, HEADER_SIZE};
//! use bytes::Bytes;
//!
//! let bytes = build_frame(b"{}").unwrap();
//! assert_eq!(bytes.len(), HEADER_SIZE + 2);
//!
//! let frame = Frame::new(Bytes::from_static(b"{}"));
//! assert_eq!(frame.len(), 2);
//! ```

use bytes::Bytes;
use serde_json::Value;

use super::wire_format::{encode_header, payload_length, HEADER_SIZE};
use crate::codec::JsonCodec;
use crate::error::Result;

/// A complete protocol frame (payload only, the header is implied by its length).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Payload bytes.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame from payload bytes.
    pub fn new(payload: Bytes) -> Self {
        Self { payload }
    }

    /// Create a frame from raw bytes (copies data).
    pub fn from_slice(payload: &[u8]) -> Self {
        Self {
            payload: Bytes::copy_from_slice(payload),
        }
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True for a zero-length payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Decode the payload as JSON into a generic value.
    pub fn decode_value(&self) -> Result<Value> {
        JsonCodec::decode(&self.payload)
    }
}

/// Build a complete frame (header + payload) as a single byte vector.
///
/// # Errors
///
/// Returns `FrameTooLarge` if the payload length does not fit in the header.
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>> {
    let header = encode_header(payload_length(payload.len())?);
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    buf.extend_from_slice(&header);
    buf.extend_from_slice(payload);
    Ok(buf)
}
