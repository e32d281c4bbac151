//! Protocol module - wire format, framing, and frame I/O.
//!
//! This module implements the frame codec:
//! - 4-byte big-endian length header encoding/decoding
//! - Blocking encode/decode of whole messages over `std::io` streams
//! - Frame buffer for accumulating partial reads from async sockets

mod frame;
mod frame_buffer;
mod stream;
mod wire_format;

pub use frame::{build_frame, Frame};
pub use frame_buffer::FrameBuffer;
pub use stream::{
    decode_message, decode_message_as, decode_message_with_limit, encode_message, read_frame,
    write_frame,
};
pub use wire_format::{
    decode_header, encode_header, payload_length, validate_length,
    DEFAULT_MAX_PAYLOAD_SIZE, HEADER_SIZE, UNBOUNDED_PAYLOAD_SIZE,
};
