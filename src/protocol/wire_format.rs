//! Wire format encoding and decoding.
//!
//! Every message travels as a single frame:
//! ```text
//! ┌──────────────┬──────────────────────────┐
//! │ Length       │ Payload                  │
//! │ 4 bytes      │ `Length` bytes of JSON   │
//! │ uint32 BE    │                          │
//! └──────────────┴──────────────────────────┘
//! ```
//!
//! The length prefix always equals the payload byte count. There is no
//! padding and no delimiter between frames.

use crate::error::{Result, WireError};

/// Header size in bytes (fixed, exactly 4).
pub const HEADER_SIZE: usize = 4;

/// Default maximum payload size used by buffered readers (1 MiB).
pub const DEFAULT_MAX_PAYLOAD_SIZE: u32 = 1024 * 1024;

/// Largest length the header can express. Using it as a limit disables the check.
pub const UNBOUNDED_PAYLOAD_SIZE: u32 = u32::MAX;

/// Encode a payload length as a big-endian header.
///
/// # Example
///
/// ```
/// use lookup_wire::protocol::encode_header;
///
/// assert_eq!(encode_header(258), [0, 0, 1, 2]);
/// ```
#[inline]
pub fn encode_header(payload_length: u32) -> [u8; HEADER_SIZE] {
    payload_length.to_be_bytes()
}

/// Decode a payload length from the first four bytes of `buf`.
///
/// Returns `None` if buffer is too short.
#[inline]
pub fn decode_header(buf: &[u8]) -> Option<u32> {
    if buf.len() < HEADER_SIZE {
        return None;
    }
    Some(u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]))
}

/// Check a declared payload length against a maximum.
pub fn validate_length(payload_length: u32, max_payload_size: u32) -> Result<()> {
    if payload_length > max_payload_size {
        return Err(WireError::FrameTooLarge {
            size: payload_length as u64,
            max: max_payload_size,
        });
    }
    Ok(())
}

/// Convert an in-memory payload length to the header type.
///
/// Fails with `FrameTooLarge` for payloads the 4-byte prefix cannot describe.
pub fn payload_length(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| WireError::FrameTooLarge {
        size: len as u64,
        max: UNBOUNDED_PAYLOAD_SIZE,
    })
}
