//! Integration tests for lookup-wire.
//!
//! These tests verify the integration between the frame codec and the
//! message layer, over blocking and async streams.

use std::io::Cursor;
use std::net::{TcpListener, TcpStream};
use std::thread;

use lookup_wire::message::{format_response, parse_request, parse_response, Request, Response};
use lookup_wire::protocol::{
    build_frame, decode_header, decode_message, encode_message, FrameBuffer, HEADER_SIZE,
};
use lookup_wire::{request_lookup, serve_connection, Connection, ConnectionConfig, WireError};
use serde_json::json;

fn full_response() -> Response {
    Response {
        domain: "example.com".to_string(),
        registrar: "Example Inc".to_string(),
        registration_date: "1995-08-14T04:00:00Z".to_string(),
        expiration_date: "2030-08-13T04:00:00Z".to_string(),
        name_servers: vec![
            "a.iana-servers.net".to_string(),
            "b.iana-servers.net".to_string(),
        ],
        error_message: String::new(),
    }
}

/// Request survives encode, decode and parse.
#[test]
fn test_request_round_trip() {
    for request in [
        Request::new("example.com"),
        Request::new("example.org").with_command("rdap"),
    ] {
        let mut wire = Vec::new();
        encode_message(&request, &mut wire).unwrap();

        let decoded = decode_message(&mut Cursor::new(wire)).unwrap();
        assert_eq!(parse_request(&decoded).unwrap(), request);
    }
}

/// Response survives format, encode, decode and parse.
#[test]
fn test_response_round_trip() {
    let response = full_response();

    let mut wire = Vec::new();
    encode_message(&format_response(&response), &mut wire).unwrap();

    let decoded = decode_message(&mut Cursor::new(wire)).unwrap();
    assert_eq!(parse_response(decoded).unwrap(), response);
}

/// Error responses drop every field but the message.
#[test]
fn test_error_response_round_trip() {
    let mut response = full_response();
    response.error_message = "no match for domain".to_string();

    let mut wire = Vec::new();
    encode_message(&format_response(&response), &mut wire).unwrap();
    assert_eq!(&wire[HEADER_SIZE..], br#"{"error":"no match for domain"}"#);

    let decoded = decode_message(&mut Cursor::new(wire)).unwrap();
    assert_eq!(
        parse_response(decoded).unwrap(),
        Response::error("no match for domain")
    );
}

/// Exact bytes of a default request frame.
#[test]
fn test_request_wire_bytes() {
    let mut wire = Vec::new();
    encode_message(&Request::new("example.com"), &mut wire).unwrap();

    let payload = br#"{"domain":"example.com"}"#;
    assert_eq!(decode_header(&wire), Some(payload.len() as u32));
    assert_eq!(&wire[HEADER_SIZE..], payload);
}

/// Frames written by the blocking codec are readable by the frame buffer.
#[test]
fn test_blocking_frames_through_frame_buffer() {
    let mut wire = Vec::new();
    for domain in ["a.example", "b.example", "c.example"] {
        encode_message(&Request::new(domain), &mut wire).unwrap();
    }

    let mut buffer = FrameBuffer::new();
    let mut domains = Vec::new();
    for chunk in wire.chunks(5) {
        for frame in buffer.push(chunk).unwrap() {
            domains.push(parse_request(&frame.decode_value().unwrap()).unwrap().domain);
        }
    }

    assert_eq!(domains, vec!["a.example", "b.example", "c.example"]);
    assert!(buffer.is_empty());
}

/// A truncated frame never yields a value.
#[test]
fn test_truncated_frame() {
    let mut wire = build_frame(br#"{"domain":"example.com"}"#).unwrap();
    wire.pop();

    let err = decode_message(&mut Cursor::new(wire)).unwrap_err();
    assert!(matches!(err, WireError::IncompleteFrame { .. }));
}

/// Blocking codec over a real TCP socket.
#[test]
fn test_blocking_tcp_exchange() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = parse_request(&decode_message(&mut stream).unwrap()).unwrap();
        let response = Response::success(request.domain);
        encode_message(&format_response(&response), &mut stream).unwrap();
    });

    let mut stream = TcpStream::connect(addr).unwrap();
    encode_message(&Request::new("tcp.example"), &mut stream).unwrap();
    let reply = decode_message(&mut stream).unwrap();

    assert_eq!(reply["domain"], "tcp.example");
    assert_eq!(reply["nameservers"], json!([]));
    server.join().unwrap();
}

/// Async server loop over a tokio TCP socket.
#[tokio::test]
async fn test_async_tcp_exchange() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let lookup = |request: &Request| {
            if request.domain == "example.com" {
                full_response()
            } else {
                Response::error(format!("no match for {}", request.domain))
            }
        };
        serve_connection(stream, &lookup, ConnectionConfig::default()).await
    });

    let stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let mut conn = Connection::new(stream);

    let found = request_lookup(&mut conn, &Request::new("example.com"))
        .await
        .unwrap();
    assert_eq!(found, full_response());

    let missing = request_lookup(&mut conn, &Request::new("example.invalid"))
        .await
        .unwrap();
    assert_eq!(missing.error_message, "no match for example.invalid");

    drop(conn);
    assert_eq!(server.await.unwrap().unwrap(), 2);
}
