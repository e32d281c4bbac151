//! Error types for lookup-wire.

use thiserror::Error;

/// Main error type for all framing, parsing and connection operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// Value could not be converted to JSON text (encode path).
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// I/O error on the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream ended before the header or payload was complete.
    #[error("Incomplete frame: expected {expected} bytes, got {received}")]
    IncompleteFrame {
        /// Bytes the current read stage needed.
        expected: usize,
        /// Bytes actually obtained before end of stream.
        received: usize,
    },

    /// Payload bytes are not valid JSON, or do not match the expected shape.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Payload length exceeds the configured (or representable) maximum.
    #[error("Frame size {size} exceeds maximum {max}")]
    FrameTooLarge {
        /// Declared or actual payload size.
        size: u64,
        /// Maximum accepted payload size.
        max: u32,
    },

    /// Request message is not an object.
    #[error("invalid request message format")]
    InvalidFormat,

    /// Request message has no string `domain` entry.
    #[error("missing or invalid domain in request message")]
    MissingDomain,

    /// Peer closed the connection before a reply arrived.
    #[error("Connection closed")]
    ConnectionClosed,
}

impl WireError {
    /// True for failures of the underlying stream, including premature end of stream.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WireError::Io(_) | WireError::IncompleteFrame { .. } | WireError::ConnectionClosed
        )
    }
}

/// Result type alias using WireError.
pub type Result<T> = std::result::Result<T, WireError>;
