//! Async connection adapter for tokio streams.
//!
//! [`Connection`] wraps any `AsyncRead + AsyncWrite` stream (TCP socket, Unix
//! socket, in-memory duplex) and moves whole messages across it using the
//! same frame format as the blocking codec. Incoming bytes are fed through a
//! [`FrameBuffer`], so a socket read may carry any number of frames or a
//! fraction of one.
//!
//! [`serve_connection`] drives the server side of one connection: read a
//! request, hand it to a [`Lookup`], send the formatted response, repeat
//! until the peer hangs up. [`request_lookup`] is the client side.
//!
//! # Example
//!
//! ```
//! use lookup_wire::{request_lookup, serve_connection, Connection, ConnectionConfig};
//! use lookup_wire::message::{Request, Response};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> lookup_wire::Result<()> {
//! let (client, server) = tokio::io::duplex(4096);
//!
//! let server = tokio::spawn(async move {
//!     let lookup = |request: &Request| Response::success(request.domain.clone());
//!     serve_connection(server, &lookup, ConnectionConfig::default()).await
//! });
//!
//! let mut conn = Connection::new(client);
//! let response = request_lookup(&mut conn, &Request::new("example.com")).await?;
//! assert_eq!(response.domain, "example.com");
//!
//! drop(conn);
//! assert_eq!(server.await.unwrap()?, 1);
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::codec::JsonCodec;
use crate::error::{Result, WireError};
use crate::message::{format_response, parse_request, parse_response, Request, Response};
use crate::protocol::{build_frame, Frame, FrameBuffer, DEFAULT_MAX_PAYLOAD_SIZE};

/// Default socket read buffer size.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 8 * 1024;

/// Configuration for a [`Connection`].
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Largest payload accepted from the peer.
    pub max_payload_size: u32,
    /// Size of the buffer handed to each socket read.
    pub read_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl ConnectionConfig {
    /// Set the maximum accepted payload size.
    pub fn max_payload_size(mut self, size: u32) -> Self {
        self.max_payload_size = size;
        self
    }

    /// Set the read buffer size. Clamped to at least one byte.
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(1);
        self
    }
}

/// A framed message connection over an async byte stream.
///
/// Owns the stream; not meant to be shared between tasks.
pub struct Connection<S> {
    stream: S,
    frames: FrameBuffer,
    ready: VecDeque<Frame>,
    read_buf: Vec<u8>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap a stream with default settings.
    pub fn new(stream: S) -> Self {
        Self::with_config(stream, ConnectionConfig::default())
    }

    /// Wrap a stream with custom settings.
    pub fn with_config(stream: S, config: ConnectionConfig) -> Self {
        Self {
            stream,
            frames: FrameBuffer::with_max_payload(config.max_payload_size),
            ready: VecDeque::new(),
            read_buf: vec![0u8; config.read_buffer_size.max(1)],
        }
    }

    /// Serialize `message` and write it as one frame, then flush.
    pub async fn send<T: Serialize + ?Sized>(&mut self, message: &T) -> Result<()> {
        let payload = JsonCodec::encode(message)?;
        let frame = build_frame(&payload)?;
        self.stream.write_all(&frame).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Receive the next raw frame.
    ///
    /// Returns `Ok(None)` when the peer closes at a frame boundary and
    /// `IncompleteFrame` when it closes in the middle of one.
    pub async fn recv_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            if let Some(frame) = self.ready.pop_front() {
                return Ok(Some(frame));
            }

            let n = self.stream.read(&mut self.read_buf).await?;
            if n == 0 {
                return match self.frames.missing() {
                    None => Ok(None),
                    Some((expected, received)) => {
                        Err(WireError::IncompleteFrame { expected, received })
                    }
                };
            }

            self.ready.extend(self.frames.push(&self.read_buf[..n])?);
        }
    }

    /// Receive the next message as a generic value.
    pub async fn recv(&mut self) -> Result<Option<Value>> {
        match self.recv_frame().await? {
            Some(frame) => frame.decode_value().map(Some),
            None => Ok(None),
        }
    }

    /// Give back the underlying stream. Buffered, unread bytes are dropped.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

/// The lookup engine a server hands requests to.
///
/// Lookup failures are reported through [`Response::error`], never as an
/// `Err`; the connection stays open after a failed lookup.
pub trait Lookup {
    /// Resolve one request.
    fn lookup(&self, request: &Request) -> Response;
}

impl<F> Lookup for F
where
    F: Fn(&Request) -> Response,
{
    fn lookup(&self, request: &Request) -> Response {
        self(request)
    }
}

/// Serve lookups on one connection until the peer closes it.
///
/// Requests are handled one at a time in arrival order. Any transport,
/// payload, or request validation error ends the connection and is returned.
///
/// Returns the number of requests answered.
pub async fn serve_connection<S, L>(stream: S, lookup: &L, config: ConnectionConfig) -> Result<u64>
where
    S: AsyncRead + AsyncWrite + Unpin,
    L: Lookup + ?Sized,
{
    let mut conn = Connection::with_config(stream, config);
    let mut served = 0u64;

    match serve_loop(&mut conn, lookup, &mut served).await {
        Ok(()) => {
            tracing::debug!(served, "Connection closed by peer");
            Ok(served)
        }
        Err(e) => {
            tracing::error!(served, "Connection terminated: {}", e);
            Err(e)
        }
    }
}

async fn serve_loop<S, L>(conn: &mut Connection<S>, lookup: &L, served: &mut u64) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
    L: Lookup + ?Sized,
{
    while let Some(message) = conn.recv().await? {
        let request = parse_request(&message)?;
        tracing::debug!(domain = %request.domain, command = %request.command, "Lookup request");

        let response = lookup.lookup(&request);
        if response.is_error() {
            tracing::warn!(domain = %request.domain, "Lookup failed: {}", response.error_message);
        }

        conn.send(&format_response(&response)).await?;
        *served += 1;
    }
    Ok(())
}

/// Send `request` and wait for the matching response.
///
/// # Errors
///
/// `ConnectionClosed` if the peer hangs up before replying, plus any
/// transport or payload error from the exchange.
pub async fn request_lookup<S>(conn: &mut Connection<S>, request: &Request) -> Result<Response>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    conn.send(request).await?;
    let reply = conn.recv().await?.ok_or(WireError::ConnectionClosed)?;
    parse_response(reply)
}
