//! Blocking frame I/O over `std::io` streams.
//!
//! [`encode_message`] and [`decode_message`] are the codec entry points:
//! serialize a value and write it as one frame, or read one frame and parse it
//! into a generic [`Value`]. Both are stateless; each call owns its buffers.
//!
//! # Example
//!
//! ```
//! use lookup_wire::protocol::{decode_message, encode_message};
//! use serde_json::json;
//! use std::io::Cursor;
//!
//! let mut wire = Vec::new();
//! encode_message(&json!({"domain": "example.com"}), &mut wire).unwrap();
//!
//! let value = decode_message(&mut Cursor::new(wire)).unwrap();
//! assert_eq!(value["domain"], "example.com");
//! ```

use std::io::{ErrorKind, Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::frame::{build_frame, Frame};
use super::wire_format::{decode_header, validate_length, HEADER_SIZE, UNBOUNDED_PAYLOAD_SIZE};
use crate::codec::JsonCodec;
use crate::error::{Result, WireError};

/// Serialize `message` as JSON and write it to `writer` as one frame.
///
/// Header and payload go out in a single `write_all`. Bytes already flushed
/// before a failure are not rolled back.
///
/// # Errors
///
/// `Serialization` if the value has no JSON form, `FrameTooLarge` if the
/// payload exceeds `u32::MAX` bytes, `Io` if the write fails.
pub fn encode_message<T, W>(message: &T, writer: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write + ?Sized,
{
    let payload = JsonCodec::encode(message)?;
    write_frame(writer, &payload)
}

/// Write an already-serialized payload as one frame.
pub fn write_frame<W: Write + ?Sized>(writer: &mut W, payload: &[u8]) -> Result<()> {
    let frame = build_frame(payload)?;
    writer.write_all(&frame)?;
    Ok(())
}

/// Read one frame from `reader` and parse its payload into a generic value.
///
/// No size limit is applied; use [`decode_message_with_limit`] when the peer
/// is not trusted.
pub fn decode_message<R: Read + ?Sized>(reader: &mut R) -> Result<Value> {
    decode_message_with_limit(reader, UNBOUNDED_PAYLOAD_SIZE)
}

/// Read one frame, rejecting headers that declare more than `max_payload_size` bytes.
///
/// The limit is checked before the payload buffer is allocated.
///
/// # Errors
///
/// `IncompleteFrame` if the stream ends inside the header or payload,
/// `FrameTooLarge` if the header exceeds the limit, `MalformedPayload` if the
/// payload is not valid JSON, `Io` for other read failures.
pub fn decode_message_with_limit<R: Read + ?Sized>(
    reader: &mut R,
    max_payload_size: u32,
) -> Result<Value> {
    let frame = read_frame(reader, max_payload_size)?;
    frame.decode_value()
}

/// Read one frame and deserialize its payload straight into `T`.
pub fn decode_message_as<T, R>(reader: &mut R, max_payload_size: u32) -> Result<T>
where
    T: DeserializeOwned,
    R: Read + ?Sized,
{
    let frame = read_frame(reader, max_payload_size)?;
    JsonCodec::decode_as(frame.payload())
}

/// Read one raw frame (header + payload) without interpreting the payload.
pub fn read_frame<R: Read + ?Sized>(reader: &mut R, max_payload_size: u32) -> Result<Frame> {
    let mut header = [0u8; HEADER_SIZE];
    read_exact_counted(reader, &mut header)?;

    let payload_length = decode_header(&header).unwrap_or_default();
    validate_length(payload_length, max_payload_size)?;

    let mut payload = vec![0u8; payload_length as usize];
    read_exact_counted(reader, &mut payload)?;

    Ok(Frame::new(payload.into()))
}

/// Fill `buf` completely, retrying short and interrupted reads.
///
/// End of stream before `buf` is full yields `IncompleteFrame` with the
/// number of bytes obtained.
fn read_exact_counted<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(WireError::IncompleteFrame {
                    expected: buf.len(),
                    received: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(WireError::Io(e)),
        }
    }
    Ok(())
}
