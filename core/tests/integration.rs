//! The client against live stub servers on random local ports.
//!
//! Canned servers check the exact bytes on the wire in both directions; the
//! axum router checks the client interoperates with a real HTTP stack, and
//! ureq fetching the same route is used as a reference.

use rawget_core::{write_response, Client, ClientConfig, ClientError};
use std::time::Duration;

const CANNED: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello";

fn client() -> Client {
    Client::new(&ClientConfig {
        connect_timeout: Some(Duration::from_secs(5)),
        read_timeout: Some(Duration::from_secs(5)),
    })
}

#[test]
fn canned_response_round_trip() {
    let (addr, server) = mock_server::spawn_canned(CANNED).unwrap();

    let url = format!("localhost:{}/anything", addr.port());
    let response = client().get(&url).unwrap();

    assert_eq!(response.body(), b"Hello");
    assert_eq!(
        response.header(),
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain"
    );

    let request = server.join().unwrap().unwrap();
    assert_eq!(
        request,
        format!(
            "GET /anything HTTP/1.1\nHost: localhost:{}\nConnection: close\n\n",
            addr.port()
        )
        .into_bytes()
    );
}

#[test]
fn scheme_prefixed_url_hits_the_same_server() {
    let (addr, server) = mock_server::spawn_canned(CANNED).unwrap();

    let response = client().get(&format!("http://{addr}/")).unwrap();
    assert_eq!(response.body(), b"Hello");

    let request = server.join().unwrap().unwrap();
    assert!(request.starts_with(b"GET / HTTP/1.1\n"));
}

#[test]
fn response_without_separator_is_all_body() {
    let (addr, server) = mock_server::spawn_canned(b"no headers, just text").unwrap();

    let response = client().get(&format!("{addr}/x")).unwrap();
    let mut out = Vec::new();
    write_response(&mut out, &response, false).unwrap();

    assert_eq!(out, b"no headers, just text");
    server.join().unwrap().unwrap();
}

#[test]
fn large_body_spanning_many_reads() {
    let body = "0123456789abcdef".repeat(4096);
    let raw = format!("HTTP/1.1 200 OK\r\n\r\n{body}");
    let (addr, server) = mock_server::spawn_canned(raw.as_bytes()).unwrap();

    let response = client().get(&format!("{addr}/big")).unwrap();
    assert_eq!(response.body(), body.as_bytes());
    server.join().unwrap().unwrap();
}

#[test]
fn router_serves_hello() {
    let addr = mock_server::spawn_app().unwrap();

    let response = client().get(&format!("{addr}/anything")).unwrap();
    assert_eq!(response.body(), mock_server::HELLO.as_bytes());
    assert!(response.header().starts_with(b"HTTP/1.1 200 OK"));
}

#[test]
fn path_and_query_reach_the_server_verbatim() {
    let addr = mock_server::spawn_app().unwrap();

    let response = client()
        .get(&format!("{addr}/echo/a/b?at=10:30"))
        .unwrap();
    assert_eq!(response.body(), b"/echo/a/b?at=10:30");
}

#[test]
fn status_codes_are_not_interpreted() {
    let addr = mock_server::spawn_app().unwrap();

    let response = client().get(&format!("{addr}/missing")).unwrap();
    assert!(response.header().starts_with(b"HTTP/1.1 404"));
    assert_eq!(response.body(), b"not found");
}

#[test]
fn body_matches_reference_client() {
    let addr = mock_server::spawn_app().unwrap();

    let ours = client().get(&format!("{addr}/hello")).unwrap();
    let theirs = ureq::get(&format!("http://{addr}/hello"))
        .call()
        .unwrap()
        .body_mut()
        .read_to_string()
        .unwrap();

    assert_eq!(ours.body(), theirs.as_bytes());
}

#[test]
fn refused_connection_is_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = client().get(&format!("127.0.0.1:{port}/")).unwrap_err();
    assert!(matches!(err, ClientError::Connect { .. }));
}

#[test]
fn unresolvable_host_is_an_error() {
    let err = client().get("no-such-host.invalid/").unwrap_err();
    assert!(matches!(err, ClientError::Resolve { .. }));
}
