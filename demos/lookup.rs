//! Lookup server and client over loopback TCP.
//!
//! This example demonstrates:
//! - Serving lookups on a connection with a closure as the lookup engine
//! - Issuing requests from a client connection
//! - How failed lookups come back as `{"error": ...}` responses
//!
//! ```text
//! cargo run --example lookup -- example.com nope.invalid
//! ```

use lookup_wire::message::{Request, Response};
use lookup_wire::{request_lookup, serve_connection, Connection, ConnectionConfig};
use tokio::net::{TcpListener, TcpStream};

/// Canned registry data standing in for a real WHOIS backend.
fn lookup(request: &Request) -> Response {
    if !request.domain.ends_with(".com") {
        return Response::error(format!("no match for \"{}\"", request.domain));
    }
    Response {
        domain: request.domain.clone(),
        registrar: "Example Registrar, Inc.".to_string(),
        registration_date: "1997-09-15T04:00:00Z".to_string(),
        expiration_date: "2028-09-14T04:00:00Z".to_string(),
        name_servers: vec![
            format!("ns1.{}", request.domain),
            format!("ns2.{}", request.domain),
        ],
        error_message: String::new(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let domains: Vec<String> = std::env::args().skip(1).collect();
    let domains = if domains.is_empty() {
        vec!["example.com".to_string(), "example.invalid".to_string()]
    } else {
        domains
    };

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await?;
        serve_connection(stream, &lookup, ConnectionConfig::default()).await
    });

    let mut conn = Connection::new(TcpStream::connect(addr).await?);
    for domain in domains {
        let response = request_lookup(&mut conn, &Request::new(domain.as_str())).await?;
        if response.is_error() {
            println!("{domain}: error: {}", response.error_message);
        } else {
            println!(
                "{domain}: registrar={} expires={} nameservers={}",
                response.registrar,
                response.expiration_date,
                response.name_servers.join(",")
            );
        }
    }

    drop(conn);
    let served = server.await??;
    println!("served {served} lookups");
    Ok(())
}
